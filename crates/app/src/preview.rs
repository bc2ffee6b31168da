use dioxus::prelude::*;
use shared_types::MessageRole;
use shared_ui::components::ChatAvatar;

/// Role labels shown in the preview, in display order. Includes the
/// empty and upper-case labels that fall through to the assistant badge.
pub const SAMPLE_ROLES: &[&str] = &["user", "assistant", "system", "", "USER"];

/// One row per sample role: the badge as a chat message would show it,
/// followed by the raw label and the parsed role.
#[component]
pub fn AvatarPreview() -> Element {
    rsx! {
        ul { class: "avatar-preview",
            for role in SAMPLE_ROLES.iter().copied() {
                li { key: "{role}", class: "avatar-preview-row",
                    ChatAvatar { role }
                    code { class: "avatar-preview-label", "{role:?}" }
                    span { class: "avatar-preview-kind", {MessageRole::parse(role).avatar_kind().as_str()} }
                }
            }
        }
    }
}
