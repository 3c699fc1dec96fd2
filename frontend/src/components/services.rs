use site_core::content::{Service, SERVICES};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::hooks::{use_reduced_motion, viewport_width};

/// Below this width the list is shown statically.
const AUTO_SCROLL_MIN_WIDTH: f64 = 768.0;

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: Service,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let service = props.service;
    html! {
        <div class="service-card">
            <div class={classes!("service-icon", format!("accent-{}", service.accent))}>
                {service.icon}
            </div>
            <div>
                <h3>{service.title}</h3>
                <p>{service.description}</p>
                <div class="service-tags">
                    { for service.tags.iter().map(|tag| html! {
                        <span class="service-tag" key={*tag}>{*tag}</span>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let reduced_motion = use_reduced_motion();
    let wide = use_state(|| viewport_width() >= AUTO_SCROLL_MIN_WIDTH);
    let hovered = use_state(|| false);

    {
        let wide = wide.clone();
        use_event_with_window("resize", move |_: Event| {
            let now_wide = viewport_width() >= AUTO_SCROLL_MIN_WIDTH;
            if *wide != now_wide {
                wide.set(now_wide);
            }
        });
    }

    let auto_scroll = *wide && !reduced_motion;

    let on_mouse_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_mouse_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    // Doubled so the loop wraps without a visible seam.
    let cards = if auto_scroll {
        SERVICES.iter().chain(SERVICES.iter()).collect::<Vec<_>>()
    } else {
        SERVICES.iter().collect()
    };

    html! {
        <section id="services" class="services">
            <style>
                {r#"
                    .services {
                        padding: 8rem 1.5rem;
                        background: #f9fafb;
                    }
                    .services-inner {
                        max-width: 1280px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 2fr 3fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .services-intro h2 {
                        font-size: 2.75rem;
                        font-weight: 800;
                        margin-bottom: 1.5rem;
                    }
                    .services-intro h2 span {
                        color: var(--horizon-orange);
                    }
                    .services-intro p {
                        color: #4b5563;
                        line-height: 1.7;
                        margin-bottom: 2rem;
                    }
                    .services-cta {
                        display: inline-block;
                        padding: 0.75rem 1.75rem;
                        border-radius: 9999px;
                        color: white;
                        font-weight: 600;
                        text-decoration: none;
                        background: linear-gradient(to right, var(--horizon-orange), var(--horizon-amber));
                    }
                    .services-window {
                        position: relative;
                        overflow: hidden;
                    }
                    .services-window.scrolling {
                        height: 560px;
                        mask-image: linear-gradient(to bottom, transparent, black 10%, black 90%, transparent);
                    }
                    .services-track {
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }
                    .services-track.scrolling {
                        animation: servicesLoop 40s linear infinite;
                    }
                    .services-track.paused {
                        animation-play-state: paused;
                    }
                    @keyframes servicesLoop {
                        from { transform: translateY(0); }
                        to { transform: translateY(calc(-50% - 0.625rem)); }
                    }
                    .service-card {
                        display: flex;
                        gap: 1.25rem;
                        padding: 1.5rem;
                        background: white;
                        border-radius: 1.25rem;
                        border: 1px solid #f3f4f6;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
                    }
                    .service-card h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                    }
                    .service-card p {
                        color: #4b5563;
                        line-height: 1.6;
                    }
                    .service-icon {
                        flex-shrink: 0;
                        width: 56px;
                        height: 56px;
                        border-radius: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.6rem;
                    }
                    .accent-orange-amber { background: linear-gradient(135deg, var(--horizon-orange), var(--horizon-amber)); }
                    .accent-amber-green { background: linear-gradient(135deg, var(--horizon-amber), var(--horizon-green)); }
                    .accent-green-orange { background: linear-gradient(135deg, var(--horizon-green), var(--horizon-orange)); }
                    .accent-orange-green { background: linear-gradient(135deg, var(--horizon-orange), var(--horizon-green)); }
                    .accent-amber-orange { background: linear-gradient(135deg, var(--horizon-amber), var(--horizon-orange)); }
                    .accent-green-amber { background: linear-gradient(135deg, var(--horizon-green), var(--horizon-amber)); }
                    .service-tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin-top: 0.75rem;
                    }
                    .service-tag {
                        font-size: 0.75rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: rgba(242, 140, 40, 0.1);
                        color: var(--horizon-orange);
                    }
                    @media (max-width: 1023px) {
                        .services-inner {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="services-inner">
                <div class="services-intro">
                    <h2>{"What We "}<span>{"Deliver"}</span></h2>
                    <p>
                        {"From the first line of code to round-the-clock support, we build and run the systems your organization depends on."}
                    </p>
                    <a href="#contact" class="services-cta">{"Start a Project"}</a>
                </div>

                <div class={classes!("services-window", auto_scroll.then(|| "scrolling"))}
                    onmouseenter={on_mouse_enter}
                    onmouseleave={on_mouse_leave}>
                    <div class={classes!(
                        "services-track",
                        auto_scroll.then(|| "scrolling"),
                        (auto_scroll && *hovered).then(|| "paused"),
                    )}>
                        { for cards.into_iter().enumerate().map(|(idx, service)| html! {
                            <ServiceCard key={idx} service={*service} />
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
