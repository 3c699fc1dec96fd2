use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error};
use site_core::content::{BRAND_MARK, COMPANY_NAME, SECTIONS};
use site_core::nav::{NavBarState, NavTransition};
use site_core::sections::{label_for, SectionTracker, VisibilityObserver};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::hooks::{region_of, use_reduced_motion, use_site_config, viewport_height};

#[function_component(Nav)]
pub fn nav() -> Html {
    let config = use_site_config();
    let reduced_motion = use_reduced_motion();

    let active = use_state(|| SECTIONS[0]);
    let hidden = use_state(|| false);
    let scrolled = use_state(|| false);
    let progress = use_state(|| 0.0_f64);
    let menu_open = use_state(|| false);

    // Scroll: section tracking, hide/reveal and the progress bar.
    {
        let active = active.clone();
        let hidden = hidden.clone();
        let scrolled = scrolled.clone();
        let progress = progress.clone();
        use_effect_with_deps(
            move |config| {
                let tracker_config = config.tracker;
                let bar_config = config.nav;
                let teardown: Box<dyn FnOnce()> = match (
                    window(),
                    SectionTracker::new(&SECTIONS, tracker_config.threshold),
                ) {
                    (Some(window), Ok(tracker)) => {
                        let tracker = Rc::new(RefCell::new(tracker));
                        let bar = Rc::new(RefCell::new(NavBarState::default()));
                        let document = window.document();

                        let on_scroll: Rc<dyn Fn()> = {
                            let window = window.clone();
                            Rc::new(move || {
                                let Some(document) = document.as_ref() else {
                                    return;
                                };
                                let y = window.scroll_y().unwrap_or(0.0);
                                let viewport = viewport_height();
                                let page_height = document
                                    .document_element()
                                    .map(|el| el.scroll_height() as f64)
                                    .unwrap_or(0.0);

                                let mut bar = bar.borrow_mut();
                                let was_scrolled = bar.scrolled();
                                if let Some(transition) =
                                    bar.on_scroll(&bar_config, y, page_height - viewport)
                                {
                                    debug!("Nav bar {:?} at {}px", transition, y);
                                    hidden.set(transition == NavTransition::Hide);
                                }
                                if bar.scrolled() != was_scrolled {
                                    scrolled.set(bar.scrolled());
                                }
                                progress.set(bar.progress());

                                let mut tracker = tracker.borrow_mut();
                                let before = tracker.navigation();
                                for id in SECTIONS {
                                    match document.get_element_by_id(id) {
                                        Some(element) => {
                                            let ratio = tracker_config
                                                .band
                                                .visibility(region_of(&element), viewport);
                                            tracker.report_visibility(id, ratio);
                                        }
                                        None => {
                                            tracker.mark_missing(id);
                                        }
                                    }
                                }
                                let after = tracker.navigation();
                                if after != before {
                                    active.set(after.active);
                                }
                            })
                        };

                        on_scroll();

                        let listener = {
                            let on_scroll = on_scroll.clone();
                            Closure::wrap(Box::new(move || on_scroll()) as Box<dyn FnMut()>)
                        };
                        if let Err(err) = window.add_event_listener_with_callback(
                            "scroll",
                            listener.as_ref().unchecked_ref(),
                        ) {
                            error!("Failed to watch scrolling: {:?}", err);
                        }

                        Box::new(move || {
                            let _ = window.remove_event_listener_with_callback(
                                "scroll",
                                listener.as_ref().unchecked_ref(),
                            );
                            drop(listener);
                        })
                    }
                    (None, _) => Box::new(|| ()),
                    (_, Err(err)) => {
                        error!("Section tracking disabled: {}", err);
                        Box::new(|| ())
                    }
                };
                teardown
            },
            config,
        );
    }

    // Lock page scrolling behind the open drawer.
    {
        use_effect_with_deps(
            move |open| {
                set_body_overflow(if *open { "hidden" } else { "" });
                || set_body_overflow("")
            },
            *menu_open,
        );
    }

    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                menu_open.set(false);
            }
        });
    }

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(true))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let desktop_links = SECTIONS.iter().map(|id| {
        let is_active = *active == *id;
        html! {
            <li key={*id} class="nav-item">
                <a href={format!("#{}", id)}
                    class={classes!("nav-link", is_active.then(|| "active"))}
                    aria-current={is_active.then(|| "true")}>
                    {label_for(id)}
                </a>
                if is_active {
                    <span class={classes!("nav-underline", (!reduced_motion).then(|| "animated"))}></span>
                }
            </li>
        }
    });

    let mobile_links = SECTIONS.iter().map(|id| {
        html! {
            <a key={*id}
                href={format!("#{}", id)}
                onclick={close_menu.clone()}
                class={classes!("drawer-link", (*active == *id).then(|| "active"))}>
                {label_for(id)}
            </a>
        }
    });

    html! {
        <>
            <style>
                {r#"
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 3px;
                        z-index: 70;
                        background: rgba(0, 0, 0, 0.05);
                    }
                    .scroll-progress-fill {
                        height: 100%;
                        background: linear-gradient(to right, var(--horizon-orange), var(--horizon-amber), var(--horizon-green));
                        transition: width 0.25s ease-out;
                    }
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        background: transparent;
                        transform: translateY(0);
                        transition: transform 0.35s ease-out, background 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.7);
                        backdrop-filter: blur(24px);
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
                    }
                    .top-nav.hidden {
                        transform: translateY(-110px);
                    }
                    .nav-content {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 0.75rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        text-decoration: none;
                    }
                    .nav-logo-mark {
                        width: 40px;
                        height: 40px;
                        border-radius: 12px;
                        background: linear-gradient(135deg, var(--horizon-orange), var(--horizon-amber));
                        color: white;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                    }
                    .nav-logo-text {
                        font-weight: 700;
                        font-size: 1.1rem;
                        color: var(--horizon-orange);
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2.5rem;
                        list-style: none;
                        margin: 0;
                    }
                    .nav-item {
                        position: relative;
                    }
                    .nav-link {
                        color: #374151;
                        font-weight: 500;
                        text-decoration: none;
                        transition: color 0.3s;
                    }
                    .nav-link:hover,
                    .nav-link.active {
                        color: var(--horizon-orange);
                    }
                    .nav-underline {
                        position: absolute;
                        left: 0;
                        bottom: -8px;
                        height: 3px;
                        width: 100%;
                        border-radius: 9999px;
                        background: linear-gradient(to right, var(--horizon-orange), var(--horizon-green));
                    }
                    .nav-underline.animated {
                        animation: underlineIn 0.3s ease-out;
                    }
                    @keyframes underlineIn {
                        from { transform: scaleX(0); }
                        to { transform: scaleX(1); }
                    }
                    .nav-cta {
                        padding: 0.5rem 1.25rem;
                        border-radius: 9999px;
                        color: white;
                        text-decoration: none;
                        background: linear-gradient(to right, var(--horizon-orange), var(--horizon-amber));
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .burger-menu {
                        display: none;
                        font-size: 1.8rem;
                        color: var(--horizon-orange);
                        background: none;
                        border: none;
                    }
                    .drawer-overlay {
                        position: fixed;
                        inset: 0;
                        background: black;
                        opacity: 0.6;
                        z-index: 40;
                    }
                    .drawer {
                        position: fixed;
                        top: 0;
                        right: 0;
                        height: 100%;
                        width: 20rem;
                        background: white;
                        z-index: 50;
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                        box-shadow: -20px 0 40px rgba(0, 0, 0, 0.2);
                        animation: drawerIn 0.3s ease-out;
                    }
                    @keyframes drawerIn {
                        from { transform: translateX(100%); }
                        to { transform: translateX(0); }
                    }
                    .drawer-close {
                        align-self: flex-end;
                        font-size: 1.5rem;
                        color: var(--horizon-orange);
                        background: none;
                        border: none;
                        margin-bottom: 2.5rem;
                    }
                    .drawer-links {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .drawer-link {
                        font-size: 1.25rem;
                        font-weight: 500;
                        color: #374151;
                        text-decoration: none;
                    }
                    .drawer-link.active {
                        color: var(--horizon-orange);
                    }
                    .drawer .nav-cta {
                        margin-top: auto;
                        text-align: center;
                    }
                    @media (max-width: 1023px) {
                        .nav-links {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                    }
                "#}
            </style>
            <div class="scroll-progress">
                <div class="scroll-progress-fill" style={format!("width: {:.2}%;", *progress)}></div>
            </div>

            <nav class={classes!("top-nav", (*scrolled).then(|| "scrolled"), (*hidden).then(|| "hidden"))}
                role="navigation"
                aria-label="Main navigation">
                <div class="nav-content">
                    <a href="#home" class="nav-logo">
                        <div class="nav-logo-mark">{BRAND_MARK}</div>
                        <span class="nav-logo-text">{COMPANY_NAME}</span>
                    </a>

                    <ul class="nav-links">
                        { for desktop_links }
                        <li>
                            <a href="#contact" class="nav-cta">{"Get Started"}</a>
                        </li>
                    </ul>

                    <button class="burger-menu" onclick={open_menu} aria-label="Open menu">
                        {"☰"}
                    </button>
                </div>
            </nav>

            if *menu_open {
                <>
                <div class="drawer-overlay" onclick={close_menu.clone()}></div>
                <div class="drawer">
                    <button class="drawer-close" onclick={close_menu.clone()} aria-label="Close menu">
                        {"✕"}
                    </button>
                    <div class="drawer-links">
                        { for mobile_links }
                    </div>
                    <a href="#contact" class="nav-cta" onclick={close_menu.clone()}>
                        {"Get Started"}
                    </a>
                </div>
                </>
            }
        </>
    }
}

fn set_body_overflow(value: &str) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", value);
    }
}
