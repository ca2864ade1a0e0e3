use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Small,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Small => "btn-small",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] icon: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let classes = if class.is_empty() {
        variant.classes().to_string()
    } else {
        format!("{} {}", variant.classes(), class)
    };
    view! {
        <button
            type="button"
            class=classes
            disabled=move || disabled.get()
            {..attributes}
        >
            {icon.map(|icon| view! { <i class=icon></i> " " })}
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_button_classes() {
        assert_eq!(ButtonVariant::Primary.classes(), "btn-primary");
        assert_eq!(ButtonVariant::Secondary.classes(), "btn-secondary");
        assert_eq!(ButtonVariant::Small.classes(), "btn-small");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_icon_and_extra_class() {
        let html = render_to_string(|| {
            view! {
                <Button variant=ButtonVariant::Secondary class="filter-btn" icon="fas fa-filter">
                    "Apply Filters"
                </Button>
            }
        });
        assert!(html.contains("btn-secondary filter-btn"));
        assert!(html.contains("fas fa-filter"));
        assert!(html.contains("Apply Filters"));
    }
}
