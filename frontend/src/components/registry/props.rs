use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RegistryProps {
    /// Base address of the enrollment API. Falls back to the built-in default
    /// when absent or blank.
    #[prop_or_default]
    pub api_base_url: Option<AttrValue>,
}
