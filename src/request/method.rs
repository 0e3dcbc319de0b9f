//! The fixed HTTP method set.

use crate::error::Error;

use std::fmt;
use std::str::FromStr;

/// HTTP methods accepted by a request descriptor.
///
/// The set is fixed; parsing from a string is case-insensitive and the enum
/// itself is the canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Options,
    Patch,
}

impl Method {
    /// The canonical (upper-case) name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Patch => "PATCH",
        }
    }

    /// Whether auto-differentiation routes the caller's `data` into the query
    /// string for this method.
    ///
    /// Only the read-only retrieval method does; every other method keeps
    /// `data` as the request body.
    pub fn sends_data_as_query(&self) -> bool {
        matches!(self, Method::Get)
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
            Method::Head => reqwest::Method::HEAD,
            Method::Options => reqwest::Method::OPTIONS,
            Method::Patch => reqwest::Method::PATCH,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            "HEAD" => Ok(Method::Head),
            "OPTIONS" => Ok(Method::Options),
            "PATCH" => Ok(Method::Patch),
            other => Err(Error::InvalidField {
                field: "method",
                reason: format!("`{other}` is not a supported HTTP method"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("get".parse::<Method>().unwrap(), Method::Get);
        assert_eq!("GET".parse::<Method>().unwrap(), Method::Get);
        assert_eq!("pAtCh".parse::<Method>().unwrap(), Method::Patch);
    }

    #[test]
    fn test_parse_rejects_unknown_method() {
        let err = "TRACE".parse::<Method>().unwrap_err();
        assert!(matches!(err, Error::InvalidField { field: "method", .. }));
    }

    #[test]
    fn test_only_get_routes_data_to_query() {
        assert!(Method::Get.sends_data_as_query());
        for method in [
            Method::Post,
            Method::Put,
            Method::Delete,
            Method::Head,
            Method::Options,
            Method::Patch,
        ] {
            assert!(!method.sends_data_as_query(), "{method}");
        }
    }
}
