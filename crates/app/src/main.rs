use dioxus::prelude::*;

mod config;
mod preview;

use preview::AvatarPreview;

fn main() {
    // Dioxus installs the tracing subscriber on launch, so config is loaded
    // lazily from inside the app rather than here.
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        config::load_config();
        config::chat_avatar_config()
    });

    rsx! {
        main { class: "chat-avatar-preview",
            h1 { "Chat avatars" }
            AvatarPreview {}
        }
    }
}
