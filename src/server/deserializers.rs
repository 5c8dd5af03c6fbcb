use serde::{Deserialize, Deserializer};

pub fn default_page() -> u32 {
    1
}

// query params arrive as strings; anything that does not parse as an
// unsigned integer falls back to the first page
pub fn deserialize_lenient_page<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.parse().ok()).unwrap_or_else(default_page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct PageQuery {
        #[serde(default = "default_page", deserialize_with = "deserialize_lenient_page")]
        page: u32,
    }

    #[test]
    fn numeric_string_parses() {
        let q: PageQuery = serde_json::from_value(json!({ "page": "3" })).unwrap();
        assert_eq!(q.page, 3);
    }

    #[test]
    fn missing_page_defaults_to_one() {
        let q: PageQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(q.page, 1);
    }

    #[test]
    fn garbage_defaults_to_one() {
        let q: PageQuery = serde_json::from_value(json!({ "page": "abc" })).unwrap();
        assert_eq!(q.page, 1);
    }

    #[test]
    fn zero_is_accepted_as_is() {
        let q: PageQuery = serde_json::from_value(json!({ "page": "0" })).unwrap();
        assert_eq!(q.page, 0);
    }
}
