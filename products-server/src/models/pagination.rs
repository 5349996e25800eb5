//! Offset/limit paging for the product list

/// Maximum rows per page
const MAX_COUNT: i64 = 100;

/// Default rows per page
const DEFAULT_COUNT: i64 = 10;

/// Paging window applied to `get_products`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Rows to skip
    pub start: i64,
    /// Rows to return (1..=100)
    pub count: i64,
}

impl Page {
    /// Create a page with coercion.
    ///
    /// - Count below 1 falls back to the default, above 100 is clamped
    /// - Negative start is clamped to 0
    pub fn new(start: i64, count: i64) -> Self {
        let count = if count < 1 {
            DEFAULT_COUNT
        } else {
            count.min(MAX_COUNT)
        };

        Self {
            start: start.max(0),
            count,
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            start: 0,
            count: DEFAULT_COUNT,
        }
    }
}

/// Raw `?count=&start=` query parameters.
///
/// Kept as strings so unparsable values coerce to defaults instead of
/// rejecting the request.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub count: Option<String>,
    pub start: Option<String>,
}

impl ListParams {
    /// Collect from decoded query pairs. The first occurrence of a key
    /// wins; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "count" => &mut params.count,
                "start" => &mut params.start,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

impl From<ListParams> for Page {
    fn from(params: ListParams) -> Self {
        let count = parse_or(params.count.as_deref(), DEFAULT_COUNT);
        let start = parse_or(params.start.as_deref(), 0);
        Self::new(start, count)
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}
