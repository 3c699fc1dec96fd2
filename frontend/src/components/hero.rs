use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, warn};
use site_core::carousel::{Carousel, Direction, PauseReason, SwipeTracker};
use site_core::content::SLIDES;
use yew::prelude::*;

use crate::hooks::{use_reduced_motion, use_site_config};

/// The hero card's carousel as Yew reducer state.
#[derive(Clone, PartialEq)]
struct HeroCarousel(Carousel);

enum HeroAction {
    Tick,
    Pause(PauseReason),
    Resume(PauseReason),
    Step(Direction),
    Show(usize),
}

impl Reducible for HeroCarousel {
    type Action = HeroAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut carousel = self.0;
        match action {
            HeroAction::Tick => {
                carousel.tick();
            }
            HeroAction::Pause(reason) => {
                if carousel.pause(reason) {
                    debug!("Hero carousel paused by {:?}", reason);
                }
            }
            HeroAction::Resume(reason) => {
                if carousel.resume(reason) {
                    debug!("Hero carousel resumed after {:?}", reason);
                }
            }
            HeroAction::Step(direction) => carousel.step(direction),
            HeroAction::Show(index) => carousel.go_to(index as isize),
        }
        Rc::new(HeroCarousel(carousel))
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let config = use_site_config();
    let reduced_motion = use_reduced_motion();
    let swipe_threshold = config.carousel.swipe_threshold_px;

    let carousel = {
        let interval_ms = config.carousel.interval_ms;
        use_reducer(move || {
            let carousel = Carousel::new(SLIDES.len(), interval_ms).unwrap_or_else(|err| {
                warn!("Hero carousel falling back to defaults: {}", err);
                Carousel::default()
            });
            HeroCarousel(carousel)
        })
    };
    let swipe = use_mut_ref(SwipeTracker::default);

    // One interval per running stretch; dropping it cancels it.
    {
        let dispatcher = carousel.clone();
        let running = carousel.0.is_running();
        let epoch = carousel.0.epoch();
        let interval_ms = carousel.0.interval_ms();
        use_effect_with_deps(
            move |(running, _)| {
                let timer = running.then(|| {
                    Interval::new(interval_ms, move || dispatcher.dispatch(HeroAction::Tick))
                });
                move || drop(timer)
            },
            (running, epoch),
        );
    }

    let on_mouse_enter = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(HeroAction::Pause(PauseReason::Pointer)))
    };
    let on_mouse_leave = {
        let carousel = carousel.clone();
        let swipe = swipe.clone();
        Callback::from(move |_: MouseEvent| {
            if swipe.borrow().is_active() {
                swipe.borrow_mut().cancel();
                carousel.dispatch(HeroAction::Resume(PauseReason::Drag));
            }
            carousel.dispatch(HeroAction::Resume(PauseReason::Pointer));
        })
    };
    let on_pointer_down = {
        let carousel = carousel.clone();
        let swipe = swipe.clone();
        Callback::from(move |e: PointerEvent| {
            swipe.borrow_mut().begin(f64::from(e.client_x()));
            carousel.dispatch(HeroAction::Pause(PauseReason::Drag));
        })
    };
    let on_pointer_up = {
        let carousel = carousel.clone();
        let swipe = swipe.clone();
        Callback::from(move |e: PointerEvent| {
            if !swipe.borrow().is_active() {
                return;
            }
            let swiped = swipe
                .borrow_mut()
                .finish(f64::from(e.client_x()), swipe_threshold);
            if let Some(direction) = swiped {
                carousel.dispatch(HeroAction::Step(direction));
            }
            carousel.dispatch(HeroAction::Resume(PauseReason::Drag));
        })
    };
    let on_key_down = {
        let carousel = carousel.clone();
        Callback::from(move |e: KeyboardEvent| {
            if let Some(direction) = Direction::from_key(&e.key()) {
                e.prevent_default();
                carousel.dispatch(HeroAction::Step(direction));
            }
        })
    };
    let on_focus_in = {
        let carousel = carousel.clone();
        Callback::from(move |_: FocusEvent| carousel.dispatch(HeroAction::Pause(PauseReason::Focus)))
    };
    let on_focus_out = {
        let carousel = carousel.clone();
        Callback::from(move |_: FocusEvent| carousel.dispatch(HeroAction::Resume(PauseReason::Focus)))
    };

    let state = carousel.0;
    let slide = SLIDES[state.index() % SLIDES.len()];

    let dots = (0..SLIDES.len()).map(|idx| {
        let onclick = {
            let carousel = carousel.clone();
            Callback::from(move |_: MouseEvent| carousel.dispatch(HeroAction::Show(idx)))
        };
        html! {
            <button key={idx}
                class={classes!("hero-dot", (idx == state.index()).then(|| "active"))}
                aria-label={format!("Show slide {}: {}", idx + 1, SLIDES[idx].title)}
                aria-current={(idx == state.index()).then(|| "true")}
                {onclick}>
            </button>
        }
    });

    html! {
        <section id="home" class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        width: 100%;
                        min-height: 100svh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                        background: linear-gradient(to bottom, #8fb36b, #6f8f55);
                        color: white;
                    }
                    .hero-accent {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 3px;
                        background: linear-gradient(to right, var(--horizon-orange), var(--horizon-amber), transparent);
                    }
                    .hero-grid {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background-image:
                            linear-gradient(to right, rgba(255,255,255,0.15) 1px, transparent 1px),
                            linear-gradient(to bottom, rgba(255,255,255,0.15) 1px, transparent 1px);
                        background-size: 64px 64px;
                    }
                    .hero-grid.animated {
                        animation: gridDrift 150s linear infinite;
                    }
                    @keyframes gridDrift {
                        from { background-position: 0 0; }
                        to { background-position: 64px 64px; }
                    }
                    .hero-inner {
                        position: relative;
                        z-index: 10;
                        width: 100%;
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 6rem 1.5rem;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 5rem;
                        align-items: center;
                    }
                    .hero h1 {
                        font-weight: 800;
                        line-height: 1.15;
                        margin-bottom: 1.5rem;
                        font-size: 56px;
                    }
                    .hero h1 span {
                        display: block;
                        color: var(--horizon-amber);
                    }
                    .hero-lead {
                        color: rgba(255, 255, 255, 0.85);
                        line-height: 1.7;
                        font-size: 18px;
                        max-width: 42rem;
                    }
                    .hero-card {
                        position: relative;
                        border-radius: 30px;
                        padding: 2.5rem;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(40px);
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        box-shadow: 0 30px 80px rgba(0, 0, 0, 0.4);
                        overflow: hidden;
                        touch-action: pan-y;
                        user-select: none;
                    }
                    .hero-card.floating {
                        animation: heroFloat 6s ease-in-out infinite;
                    }
                    @keyframes heroFloat {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-6px); }
                    }
                    .hero-card:focus-visible {
                        outline: 2px solid var(--horizon-amber);
                    }
                    .hero-slide {
                        animation: slideIn 0.4s ease-out;
                    }
                    @keyframes slideIn {
                        from { opacity: 0; transform: translateY(15px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero-slide h2 {
                        font-weight: 600;
                        font-size: 28px;
                        margin-bottom: 1rem;
                    }
                    .hero-slide p {
                        color: rgba(255, 255, 255, 0.85);
                        line-height: 1.7;
                        font-size: 18px;
                    }
                    .hero-progress {
                        margin-top: 2rem;
                        height: 4px;
                        width: 100%;
                        background: rgba(255, 255, 255, 0.2);
                        border-radius: 9999px;
                        overflow: hidden;
                    }
                    .hero-progress-fill {
                        height: 100%;
                        width: 100%;
                        background: var(--horizon-amber);
                        transform-origin: left;
                        animation-name: progressFill;
                        animation-timing-function: linear;
                        animation-fill-mode: forwards;
                    }
                    .hero-progress-fill.paused {
                        animation-play-state: paused;
                    }
                    @keyframes progressFill {
                        from { transform: scaleX(0); }
                        to { transform: scaleX(1); }
                    }
                    .hero-dots {
                        display: flex;
                        gap: 0.5rem;
                        margin-top: 1.25rem;
                    }
                    .hero-dot {
                        width: 10px;
                        height: 10px;
                        border-radius: 9999px;
                        border: none;
                        background: rgba(255, 255, 255, 0.35);
                        cursor: pointer;
                        padding: 0;
                    }
                    .hero-dot.active {
                        width: 24px;
                        background: var(--horizon-amber);
                    }
                    @media (max-width: 1023px) {
                        .hero-inner {
                            grid-template-columns: 1fr;
                            gap: 3rem;
                        }
                        .hero h1 {
                            font-size: 36px;
                        }
                    }
                "#}
            </style>
            <div class="hero-accent"></div>
            <div class={classes!("hero-grid", (!reduced_motion).then(|| "animated"))} aria-hidden="true"></div>

            <div class="hero-inner">
                <div>
                    <h1>
                        {"Next-Generation"}
                        <span>{"IT Solutions"}</span>
                        {"Built for Scale"}
                    </h1>
                    <p class="hero-lead">
                        {"We architect, develop, and maintain secure digital ecosystems that empower organizations to operate efficiently and scale confidently in an evolving technological landscape."}
                    </p>
                </div>

                <div class={classes!("hero-card", (!reduced_motion).then(|| "floating"))}
                    tabindex="0"
                    role="region"
                    aria-roledescription="carousel"
                    aria-label="Our services"
                    onmouseenter={on_mouse_enter}
                    onmouseleave={on_mouse_leave}
                    onpointerdown={on_pointer_down}
                    onpointerup={on_pointer_up}
                    onkeydown={on_key_down}
                    onfocusin={on_focus_in}
                    onfocusout={on_focus_out}>
                    <div class="hero-slide" key={state.index()} aria-live="polite">
                        <h2>{slide.title}</h2>
                        <p>{slide.description}</p>
                    </div>

                    <div class="hero-progress">
                        <div key={format!("{}-{}", state.index(), state.epoch())}
                            class={classes!("hero-progress-fill", (!state.is_running()).then(|| "paused"))}
                            style={format!("animation-duration: {}ms;", state.interval_ms())}>
                        </div>
                    </div>

                    <div class="hero-dots">
                        { for dots }
                    </div>
                </div>
            </div>
        </section>
    }
}
