use log::debug;
use site_core::content::{TeamFilter, TeamMember, TEAM};
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Properties, PartialEq)]
struct ProfileModalProps {
    member: TeamMember,
    on_close: Callback<()>,
}

#[function_component(ProfileModal)]
fn profile_modal(props: &ProfileModalProps) -> Html {
    let member = props.member;
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Clicks inside the card must not reach the overlay.
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="team-modal-overlay" onclick={close.clone()}>
            <div class="team-modal" role="dialog" aria-modal="true"
                aria-label={member.name}
                onclick={swallow}>
                <button class="team-modal-close" onclick={close} aria-label="Close profile">
                    {"✕"}
                </button>
                <img class="team-modal-photo" src={member.image} alt={member.name} />
                <h3>{member.name}</h3>
                <p class="team-role">{member.role}</p>
                <p class="team-bio">{member.bio}</p>

                <div class="team-links">
                    <a href={format!("mailto:{}", member.email)}>{"Email"}</a>
                    <a href={member.github} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                    <a href={member.linkedin} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                    <a href={member.website} target="_blank" rel="noopener noreferrer">{"Website"}</a>
                </div>

                <div class="team-skills">
                    { for member.skills.iter().map(|skill| html! {
                        <div class="team-skill" key={skill.name}>
                            <div class="team-skill-label">
                                <span>{skill.name}</span>
                                <span>{format!("{}%", skill.level)}</span>
                            </div>
                            <div class="team-skill-bar">
                                <div class="team-skill-fill"
                                    style={format!("width: {}%;", skill.level.min(100))}>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[function_component(Team)]
pub fn team() -> Html {
    let filter = use_state(TeamFilter::default);
    let selected = use_state(|| None::<usize>);

    {
        let selected = selected.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && selected.is_some() {
                selected.set(None);
            }
        });
    }

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let chips = TeamFilter::ALL.iter().map(|option| {
        let option = *option;
        let is_active = *filter == option;
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| {
                debug!("Team filter set to {}", option.label());
                filter.set(option);
            })
        };
        html! {
            <button key={option.label()}
                class={classes!("team-chip", is_active.then(|| "active"))}
                aria-pressed={is_active.to_string()}
                {onclick}>
                {option.label()}
            </button>
        }
    });

    let cards = filter.apply(&TEAM).into_iter().map(|idx| {
        let member = TEAM[idx];
        let onclick = {
            let selected = selected.clone();
            Callback::from(move |_: MouseEvent| selected.set(Some(idx)))
        };
        html! {
            <button key={member.name} class="team-card" {onclick}>
                <img src={member.image} alt={member.name} loading="lazy" />
                <h3>{member.name}</h3>
                <p class="team-role">{member.role}</p>
                <span class="team-category">{member.category.label()}</span>
            </button>
        }
    });

    html! {
        <section id="team" class="team">
            <style>
                {r#"
                    .team {
                        padding: 8rem 1.5rem;
                        background: white;
                    }
                    .team-inner {
                        max-width: 1280px;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .team h2 {
                        font-size: 3rem;
                        font-weight: 800;
                        margin-bottom: 1rem;
                    }
                    .team h2 span {
                        color: var(--horizon-orange);
                    }
                    .team-lead {
                        color: #4b5563;
                        max-width: 40rem;
                        margin: 0 auto 2.5rem;
                    }
                    .team-chips {
                        display: flex;
                        justify-content: center;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                        margin-bottom: 3rem;
                    }
                    .team-chip {
                        padding: 0.5rem 1.25rem;
                        border-radius: 9999px;
                        border: 1px solid #e5e7eb;
                        background: white;
                        color: #374151;
                        cursor: pointer;
                    }
                    .team-chip.active {
                        border-color: transparent;
                        color: white;
                        background: linear-gradient(to right, var(--horizon-orange), var(--horizon-amber));
                    }
                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                        gap: 1.5rem;
                    }
                    .team-card {
                        padding: 1.5rem;
                        border-radius: 1.25rem;
                        border: 1px solid #f3f4f6;
                        background: white;
                        cursor: pointer;
                        transition: transform 0.3s, box-shadow 0.3s;
                    }
                    .team-card:hover {
                        transform: translateY(-4px);
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08);
                    }
                    .team-card img,
                    .team-modal-photo {
                        width: 112px;
                        height: 112px;
                        border-radius: 9999px;
                        object-fit: cover;
                        margin-bottom: 1rem;
                    }
                    .team-role {
                        color: var(--horizon-orange);
                        font-weight: 500;
                    }
                    .team-category {
                        display: inline-block;
                        margin-top: 0.5rem;
                        font-size: 0.75rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: rgba(111, 143, 85, 0.12);
                        color: var(--horizon-green);
                    }
                    .team-modal-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 80;
                        background: rgba(0, 0, 0, 0.6);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1.5rem;
                    }
                    .team-modal {
                        position: relative;
                        width: 100%;
                        max-width: 32rem;
                        max-height: 90vh;
                        overflow-y: auto;
                        background: white;
                        border-radius: 1.5rem;
                        padding: 2.5rem 2rem;
                        text-align: center;
                    }
                    .team-modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        font-size: 1.25rem;
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: #6b7280;
                    }
                    .team-bio {
                        color: #4b5563;
                        margin: 1rem 0;
                    }
                    .team-links {
                        display: flex;
                        justify-content: center;
                        flex-wrap: wrap;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .team-links a {
                        color: var(--horizon-orange);
                        font-weight: 500;
                    }
                    .team-skills {
                        text-align: left;
                    }
                    .team-skill {
                        margin-bottom: 0.75rem;
                    }
                    .team-skill-label {
                        display: flex;
                        justify-content: space-between;
                        font-size: 0.875rem;
                        margin-bottom: 0.25rem;
                    }
                    .team-skill-bar {
                        height: 6px;
                        border-radius: 9999px;
                        background: #f3f4f6;
                        overflow: hidden;
                    }
                    .team-skill-fill {
                        height: 100%;
                        background: linear-gradient(to right, var(--horizon-orange), var(--horizon-green));
                    }
                "#}
            </style>
            <div class="team-inner">
                <h2>{"Meet the "}<span>{"Team"}</span></h2>
                <p class="team-lead">
                    {"The people who design, build, and support every system we deliver."}
                </p>

                <div class="team-chips" role="group" aria-label="Filter team members">
                    { for chips }
                </div>

                <div class="team-grid">
                    { for cards }
                </div>
            </div>

            if let Some(member) = (*selected).and_then(|idx| TEAM.get(idx).copied()) {
                <ProfileModal {member} {on_close} />
            }
        </section>
    }
}
