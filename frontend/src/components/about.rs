use std::rc::Rc;

use chrono::Local;
use gloo_timers::callback::Interval;
use site_core::content::{
    founded_on, years_active, ValueCard, MILESTONES, ONGOING_PROJECTS, VALUES, WORK_STEPS,
};
use site_core::count_up::{CountUp, CountUpTiming};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;

use crate::hooks::{region_of, use_reduced_motion, use_site_config, viewport_height};

#[derive(Clone, PartialEq)]
struct Counter(CountUp);

enum CounterAction {
    Start { reduced_motion: bool },
    Step,
}

impl Reducible for Counter {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut counter = self.0;
        match action {
            CounterAction::Start { reduced_motion } => {
                counter.start(reduced_motion);
            }
            CounterAction::Step => {
                counter.step();
            }
        }
        Rc::new(Counter(counter))
    }
}

#[derive(Properties, PartialEq)]
pub struct CountUpNumberProps {
    pub end: u64,
    #[prop_or_default]
    pub suffix: AttrValue,
    pub timing: CountUpTiming,
}

/// Counts up to `end` the first time it scrolls into view.
#[function_component(CountUpNumber)]
pub fn count_up_number(props: &CountUpNumberProps) -> Html {
    let node = use_node_ref();
    let reduced_motion = use_reduced_motion();
    let counter = {
        let end = props.end;
        let timing = props.timing;
        use_reducer(move || Counter(CountUp::new(end, timing).unwrap_or_else(|_| CountUp::settled(end))))
    };

    // Watch for the first time the number is on screen.
    {
        let node = node.clone();
        let counter = counter.clone();
        let started = counter.0.is_started();
        use_effect_with_deps(
            move |started| {
                let mut listener = None;
                if !*started {
                    let check = move || {
                        let visible = node
                            .cast::<Element>()
                            .map(|el| region_of(&el).is_on_screen(viewport_height()))
                            .unwrap_or(false);
                        if visible {
                            counter.dispatch(CounterAction::Start { reduced_motion });
                        }
                    };
                    check();
                    if let Some(window) = window() {
                        let closure = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                        let _ = window.add_event_listener_with_callback(
                            "scroll",
                            closure.as_ref().unchecked_ref(),
                        );
                        listener = Some((window, closure));
                    }
                }
                move || {
                    if let Some((window, closure)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            closure.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            started,
        );
    }

    {
        let dispatcher = counter.clone();
        let running = counter.0.is_running();
        let step_ms = counter.0.step_ms();
        use_effect_with_deps(
            move |running| {
                let timer = running
                    .then(|| Interval::new(step_ms, move || dispatcher.dispatch(CounterAction::Step)));
                move || drop(timer)
            },
            running,
        );
    }

    html! {
        <span ref={node}>
            {counter.0.displayed()}
            {props.suffix.clone()}
        </span>
    }
}

#[derive(Properties, PartialEq)]
struct FlipCardProps {
    card: ValueCard,
}

#[function_component(FlipCard)]
fn flip_card(props: &FlipCardProps) -> Html {
    let flipped = use_state(|| false);
    let onclick = {
        let flipped = flipped.clone();
        Callback::from(move |_: MouseEvent| flipped.set(!*flipped))
    };
    let card = props.card;

    html! {
        <button class="flip-card" {onclick} aria-pressed={(*flipped).to_string()}>
            <div class={classes!("flip-card-inner", (*flipped).then(|| "flipped"))}>
                <div class="flip-card-face flip-card-front">
                    <div class="flip-card-icon">{card.icon}</div>
                    <h4>{card.title}</h4>
                    <span class="flip-card-hint">{"Tap to flip"}</span>
                </div>
                <div class="flip-card-face flip-card-back">
                    <p>{card.description}</p>
                </div>
            </div>
        </button>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let config = use_site_config();
    let timing = config.count_up;
    let years = years_active(Local::now().date_naive());
    let founded = founded_on()
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_default();

    html! {
        <section id="about" class="about">
            <style>
                {r#"
                    .about {
                        position: relative;
                        padding: 8rem 1.5rem;
                        background: linear-gradient(to bottom, white, rgba(255, 220, 120, 0.1), white);
                    }
                    .about-inner {
                        max-width: 1280px;
                        margin: 0 auto;
                    }
                    .about-header {
                        text-align: center;
                        margin-bottom: 5rem;
                    }
                    .about-badge {
                        display: inline-block;
                        margin-bottom: 1rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        background: rgba(242, 140, 40, 0.1);
                        color: var(--horizon-orange);
                        font-size: 0.875rem;
                        font-weight: 600;
                    }
                    .about-header h2 {
                        font-size: 3rem;
                        font-weight: 800;
                    }
                    .about-header h2 span {
                        background: linear-gradient(to right, var(--horizon-orange), var(--horizon-green));
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .about-columns {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                    }
                    .about h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .about p {
                        color: #4b5563;
                        line-height: 1.7;
                    }
                    .work-step {
                        display: flex;
                        gap: 1rem;
                        margin-bottom: 1.25rem;
                    }
                    .work-step-icon {
                        font-size: 1.5rem;
                    }
                    .stats {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1rem;
                        margin-top: 3rem;
                    }
                    .stat {
                        background: white;
                        border: 1px solid #f3f4f6;
                        border-radius: 1rem;
                        padding: 1.5rem;
                        text-align: center;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
                    }
                    .stat h4 {
                        font-size: 1.875rem;
                        font-weight: 800;
                        color: var(--horizon-orange);
                    }
                    .timeline {
                        border-left: 3px solid var(--horizon-orange);
                        padding-left: 1.5rem;
                        margin-bottom: 3rem;
                    }
                    .milestone {
                        margin-bottom: 1.25rem;
                    }
                    .milestone-year {
                        font-weight: 700;
                        color: var(--horizon-orange);
                    }
                    .flip-cards {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.25rem;
                    }
                    .flip-card {
                        height: 12rem;
                        perspective: 1200px;
                        background: none;
                        border: none;
                        padding: 0;
                        cursor: pointer;
                    }
                    .flip-card-inner {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        transform-style: preserve-3d;
                        transition: transform 0.55s ease-in-out;
                    }
                    .flip-card-inner.flipped {
                        transform: rotateY(180deg);
                    }
                    .flip-card-face {
                        position: absolute;
                        inset: 0;
                        border-radius: 1rem;
                        padding: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        backface-visibility: hidden;
                    }
                    .flip-card-front {
                        background: white;
                        border: 1px solid #f3f4f6;
                    }
                    .flip-card-back {
                        background: linear-gradient(135deg, var(--horizon-orange), var(--horizon-green));
                        color: white;
                        transform: rotateY(180deg);
                    }
                    .flip-card-back p {
                        color: white;
                    }
                    .flip-card-icon {
                        font-size: 2rem;
                        margin-bottom: 0.5rem;
                    }
                    .flip-card-hint {
                        font-size: 0.75rem;
                        color: #9ca3af;
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .flip-card-inner {
                            transition: none;
                        }
                    }
                    @media (max-width: 1023px) {
                        .about-columns {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="about-inner">
                <div class="about-header">
                    <span class="about-badge">{format!("🚀 Established {}", founded)}</span>
                    <h2>{"About "}<span>{"NEXTGEN 9 IT Solutions"}</span></h2>
                    <p>
                        {"We craft reliable, scalable, and future-ready IT solutions that help organizations grow with confidence."}
                    </p>
                </div>

                <div class="about-columns">
                    <div>
                        <h3>{"Who We Are"}</h3>
                        <p>
                            {"NEXTGEN 9 IT Solutions was founded with a single focus: building dependable digital systems that scale as businesses evolve."}
                        </p>
                        <p>
                            {"We believe great technology starts with strong foundations, thoughtful architecture, and long-term collaboration."}
                        </p>

                        <h3>{"How We Work"}</h3>
                        { for WORK_STEPS.iter().map(|step| html! {
                            <div class="work-step" key={step.title}>
                                <div class="work-step-icon">{step.icon}</div>
                                <div>
                                    <h4>{step.title}</h4>
                                    <p>{step.description}</p>
                                </div>
                            </div>
                        }) }

                        <div class="stats">
                            <div class="stat">
                                <h4><CountUpNumber end={years} {timing} /></h4>
                                <p>{"Years Active"}</p>
                            </div>
                            <div class="stat">
                                <h4><CountUpNumber end={ONGOING_PROJECTS} suffix="+" {timing} /></h4>
                                <p>{"Ongoing Projects"}</p>
                            </div>
                            <div class="stat">
                                <h4>{"Growing"}</h4>
                                <p>{"Clients & Partners"}</p>
                            </div>
                        </div>
                    </div>

                    <div>
                        <h3>{"Our Journey"}</h3>
                        <div class="timeline">
                            { for MILESTONES.iter().map(|(year, title)| html! {
                                <div class="milestone" key={*year}>
                                    <div class="milestone-year">{*year}</div>
                                    <div>{*title}</div>
                                </div>
                            }) }
                        </div>

                        <div class="flip-cards">
                            { for VALUES.iter().map(|card| html! {
                                <FlipCard key={card.title} card={*card} />
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
