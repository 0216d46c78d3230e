use async_graphql::SimpleObject;
use url::form_urlencoded;

/// A single `name=value` pair of a request URL's query string.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct QueryItem {
    pub name: String,
    pub value: String,
}

impl QueryItem {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        QueryItem {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Looks an item up by name. Callers should not rely on item order.
pub fn find_value<'a>(items: &'a [QueryItem], name: &str) -> Option<&'a str> {
    items
        .iter()
        .find(|item| item.name == name)
        .map(|item| item.value.as_str())
}

pub fn encode_query(items: &[QueryItem]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(items.iter().map(|i| (i.name.as_str(), i.value.as_str())))
        .finish()
}
