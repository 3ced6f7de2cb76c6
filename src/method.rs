//! HTTP method as a typed enum.
//!
//! Only the RFC 9110 methods the todo API can route are represented. Anything
//! else is rejected by the router with `405 Method Not Allowed` before it ever
//! reaches the middleware chain.

use std::fmt;
use std::str::FromStr;

/// A routable HTTP method.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    Delete,
    Get,
    Head,
    Options,
    Post,
    Put,
    Trace,
}

impl Method {
    /// Returns the uppercase wire representation (e.g. `"GET"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delete  => "DELETE",
            Self::Get     => "GET",
            Self::Head    => "HEAD",
            Self::Options => "OPTIONS",
            Self::Post    => "POST",
            Self::Put     => "PUT",
            Self::Trace   => "TRACE",
        }
    }
}

/// Parses an uppercase method string (e.g. `"GET"`). Case-sensitive per RFC 9110 §9.1.
impl FromStr for Method {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DELETE"  => Ok(Self::Delete),
            "GET"     => Ok(Self::Get),
            "HEAD"    => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            "POST"    => Ok(Self::Post),
            "PUT"     => Ok(Self::Put),
            "TRACE"   => Ok(Self::Trace),
            _         => Err(()),
        }
    }
}

impl TryFrom<&http::Method> for Method {
    type Error = ();

    fn try_from(method: &http::Method) -> Result<Self, Self::Error> {
        method.as_str().parse()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_from_http_method() {
        assert_eq!(Method::try_from(&http::Method::GET), Ok(Method::Get));
        assert_eq!(Method::try_from(&http::Method::TRACE), Ok(Method::Trace));
        assert_eq!(Method::try_from(&http::Method::CONNECT), Err(()));
        assert_eq!(Method::try_from(&http::Method::PATCH), Err(()));
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert_eq!("DELETE".parse::<Method>(), Ok(Method::Delete));
        assert!("delete".parse::<Method>().is_err());
    }

    #[test]
    fn displays_wire_form() {
        assert_eq!(Method::Options.to_string(), "OPTIONS");
    }
}
