use yew::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::nav::Nav;
use crate::components::services::Services;
use crate::components::team::Team;

/// The whole single-page site, sections in navigation order.
#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <Nav />
            <main>
                <Hero />
                <About />
                <Services />
                <Team />
                <Contact />
            </main>
            <Footer />
        </>
    }
}
