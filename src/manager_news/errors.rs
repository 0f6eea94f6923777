use std::fmt;

pub enum NewsError {
    Fetch(String),
    Document(String),
}

impl fmt::Display for NewsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NewsError::Fetch(e) => write!(f, "NewsError::Fetch: {}", e),
            NewsError::Document(e) => write!(f, "NewsError::Document: {}", e),
        }
    }
}
impl From<ureq::Error> for NewsError {
    fn from(e: ureq::Error) -> Self {
        NewsError::Fetch(e.to_string())
    }
}
impl From<quick_xml::DeError> for NewsError {
    fn from(e: quick_xml::DeError) -> Self {
        NewsError::Document(e.to_string())
    }
}
