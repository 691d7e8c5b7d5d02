use crate::params::Params;
use actix_web::web;
use serde::Serialize;

/// The optional query parameters of a placeholder request
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PlaceholderQuery {
    pub text: Option<String>,
    pub bg: Option<String>,
    pub fg: Option<String>,
    pub font_size: Option<String>,
}

impl PlaceholderQuery {
    /// Lenient query parsing: unknown keys are ignored, the first occurrence
    /// of a repeated key wins, and anything undecodable counts as absent
    pub fn parse(query: &str) -> Self {
        let pairs = web::Query::<Vec<(String, String)>>::from_query(query)
            .map(web::Query::into_inner)
            .unwrap_or_default();

        let mut parsed = PlaceholderQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "text" => &mut parsed.text,
                "bg" => &mut parsed.bg,
                "fg" => &mut parsed.fg,
                "fontSize" => &mut parsed.font_size,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        parsed
    }

    pub fn into_params(self, size: String) -> Params {
        Params {
            size,
            text: self.text,
            background: self.bg,
            foreground: self.fg,
            font_size: self.font_size,
        }
    }
}

/// JSON body of every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all() {
        let query = PlaceholderQuery::parse("text=Hello%20there&bg=%23ff0000&fg=abc&fontSize=12.5");
        assert_eq!(
            query,
            PlaceholderQuery {
                text: Some("Hello there".into()),
                bg: Some("#ff0000".into()),
                fg: Some("abc".into()),
                font_size: Some("12.5".into()),
            }
        );
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(PlaceholderQuery::parse(""), PlaceholderQuery::default());
        assert_eq!(
            PlaceholderQuery::parse("foo=bar&fontsize=3"),
            PlaceholderQuery::default()
        );

        let query = PlaceholderQuery::parse("bg=111&bg=222&text=a+b&text=c");
        assert_eq!(query.bg.as_deref(), Some("111"));
        assert_eq!(query.text.as_deref(), Some("a b"));
    }

    #[test]
    fn test_into_params() {
        let params = PlaceholderQuery::parse("fg=000&text=hi").into_params("300x200".into());
        assert_eq!(params.size, "300x200");
        assert_eq!(params.foreground.as_deref(), Some("000"));
        assert_eq!(params.text.as_deref(), Some("hi"));
        assert_eq!(params.background, None);
        assert_eq!(params.font_size, None);
    }
}
