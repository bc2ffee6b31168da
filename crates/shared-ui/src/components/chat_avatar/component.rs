use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdUser;
use dioxus_free_icons::Icon;
use shared_types::{AvatarKind, ChatAvatarConfig};

/// Side length of the person glyph on the user badge, in CSS pixels.
pub const USER_ICON_SIZE: u32 = 16;
/// Side length of the logo on the assistant badge.
pub const LOGO_SIZE: u32 = 24;

/// Authorship badge shown next to a chat message.
///
/// `role == "user"` renders a person glyph on the neutral background; any
/// other role, including empty or differently-cased labels, renders the
/// assistant logo on white. The logo source comes from a
/// [`ChatAvatarConfig`] context when the host provides one.
///
/// ```rust,ignore
/// rsx! {
///     ChatAvatar { role: message.role.as_str() }
/// }
/// ```
#[component]
pub fn ChatAvatar(
    #[props(into)] role: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let kind = AvatarKind::from_role(&role);
    let config = try_use_context::<ChatAvatarConfig>().unwrap_or_default();

    let base = vec![
        Attribute::new("class", "chat-avatar", None, false),
        Attribute::new("data-style", kind.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {match kind {
                AvatarKind::User => rsx! {
                    span { class: "chat-avatar-icon",
                        Icon::<LdUser> { icon: LdUser, width: USER_ICON_SIZE, height: USER_ICON_SIZE }
                    }
                },
                AvatarKind::Assistant => rsx! {
                    img {
                        class: "chat-avatar-image",
                        src: "{config.logo_src}",
                        alt: "{config.logo_alt}",
                        width: "{LOGO_SIZE}",
                        height: "{LOGO_SIZE}",
                        // Always above the fold in a chat view.
                        "loading": "eager",
                        "fetchpriority": "high",
                    }
                },
            }}
        }
    }
}
