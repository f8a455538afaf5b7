use dioxus::prelude::*;

use ui::views::InspectionPage;

const MAIN_CSS_INLINE: &str = ui::THEME_CSS;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        // Global app resources
        document::Title { "Control Diario de Inventario" }
        document::Style { "{MAIN_CSS_INLINE}" }

        InspectionPage {}
    }
}
