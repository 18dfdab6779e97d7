use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod activation;
mod config;

mod components {
    pub mod back_to_top;
    pub mod contact_form;
    pub mod font_loader;
    pub mod footer;
    pub mod header;
}

mod pages {
    pub mod home;
    pub mod termsprivacy;
}

use components::{
    back_to_top::BackToTop, font_loader::FontLoader, footer::Footer, header::Header,
};
use pages::{
    home::Home,
    termsprivacy::{PrivacyPolicy, TermsAndConditions},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <FontLoader />
            <Header />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
            <BackToTop />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
