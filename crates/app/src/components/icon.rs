use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdBrain, LdClock, LdFileText, LdLayoutDashboard, LdPlus, LdTarget, LdTrendingUp,
    LdTrophy, LdUserPlus, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::IconTag;

/// Lucide icon for a layout icon tag.
#[component]
pub fn NavIcon(tag: IconTag, #[props(default = 18)] size: u32) -> Element {
    match tag {
        IconTag::Dashboard => rsx! { Icon { icon: LdLayoutDashboard, width: size, height: size } },
        IconTag::FileText => rsx! { Icon { icon: LdFileText, width: size, height: size } },
        IconTag::Brain => rsx! { Icon { icon: LdBrain, width: size, height: size } },
        IconTag::Users => rsx! { Icon { icon: LdUsers, width: size, height: size } },
        IconTag::BarChart => rsx! { Icon { icon: LdTrendingUp, width: size, height: size } },
        IconTag::BookOpen => rsx! { Icon { icon: LdBookOpen, width: size, height: size } },
        IconTag::Trophy => rsx! { Icon { icon: LdTrophy, width: size, height: size } },
        IconTag::PlusCircle => rsx! { Icon { icon: LdPlus, width: size, height: size } },
        IconTag::UserPlus => rsx! { Icon { icon: LdUserPlus, width: size, height: size } },
        IconTag::Target => rsx! { Icon { icon: LdTarget, width: size, height: size } },
        IconTag::Clock => rsx! { Icon { icon: LdClock, width: size, height: size } },
    }
}
