use chrono::{Datelike, Local};
use site_core::content::{BRAND_MARK, COMPANY_NAME, FOOTER_SERVICES, SECTIONS, SOCIAL_LINKS};
use site_core::sections::label_for;
use web_sys::window;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    // Smoothness comes from the page's `scroll-behavior`, which is off for
    // reduced motion.
    let back_to_top = Callback::from(|_: MouseEvent| {
        if let Some(window) = window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #111827;
                        color: #d1d5db;
                        padding: 5rem 1.5rem 2rem;
                    }
                    .footer-inner {
                        max-width: 1280px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr 1.5fr;
                        gap: 3rem;
                    }
                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 1rem;
                    }
                    .footer-mark {
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
                    .footer-name {
                        color: white;
                        font-weight: 700;
                    }
                    .footer-social {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin-top: 1.5rem;
                    }
                    .footer-social a {
                        width: 36px;
                        height: 36px;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(255, 255, 255, 0.08);
                        color: white;
                        font-size: 0.8rem;
                        text-decoration: none;
                        transition: background 0.3s;
                    }
                    .footer-social a:hover {
                        background: var(--horizon-orange);
                    }
                    .site-footer h4 {
                        color: white;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .site-footer ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.6rem;
                    }
                    .site-footer ul a {
                        color: #d1d5db;
                        text-decoration: none;
                    }
                    .site-footer ul a:hover {
                        color: var(--horizon-amber);
                    }
                    .footer-cta {
                        display: inline-block;
                        margin-top: 1rem;
                        padding: 0.6rem 1.25rem;
                        border-radius: 9999px;
                        color: white;
                        text-decoration: none;
                        background: linear-gradient(to right, var(--horizon-orange), var(--horizon-amber));
                    }
                    .footer-bottom {
                        max-width: 1280px;
                        margin: 3rem auto 0;
                        padding-top: 1.5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        font-size: 0.875rem;
                    }
                    .back-to-top {
                        background: none;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 9999px;
                        color: white;
                        padding: 0.4rem 1rem;
                        cursor: pointer;
                    }
                    @media (max-width: 1023px) {
                        .footer-inner {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                    @media (max-width: 639px) {
                        .footer-inner {
                            grid-template-columns: 1fr;
                        }
                        .footer-bottom {
                            flex-direction: column;
                            gap: 1rem;
                        }
                    }
                "#}
            </style>
            <div class="footer-inner">
                <div>
                    <div class="footer-brand">
                        <div class="footer-mark">{BRAND_MARK}</div>
                        <span class="footer-name">{COMPANY_NAME}</span>
                    </div>
                    <p>
                        {"Reliable, scalable, and secure IT solutions for organizations ready to grow."}
                    </p>
                    <div class="footer-social">
                        { for SOCIAL_LINKS.iter().map(|link| html! {
                            <a key={link.label}
                                href={link.href}
                                aria-label={link.label}
                                title={link.label}
                                target="_blank"
                                rel="noopener noreferrer">
                                {link.glyph}
                            </a>
                        }) }
                    </div>
                </div>

                <div>
                    <h4>{"Company"}</h4>
                    <ul>
                        { for SECTIONS.iter().map(|id| html! {
                            <li key={*id}>
                                <a href={format!("#{}", id)}>{label_for(id)}</a>
                            </li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Services"}</h4>
                    <ul>
                        { for FOOTER_SERVICES.iter().map(|service| html! {
                            <li key={*service}>
                                <a href="#services">{*service}</a>
                            </li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Work With Us"}</h4>
                    <p>{"Meet the people behind every project we deliver."}</p>
                    <a href="#team" class="footer-cta">{"Meet the Team"}</a>
                </div>
            </div>

            <div class="footer-bottom">
                <span>{format!("© {} {}. All rights reserved.", year, COMPANY_NAME)}</span>
                <button class="back-to-top" onclick={back_to_top} aria-label="Back to top">
                    {"↑ Back to top"}
                </button>
            </div>
        </footer>
    }
}
