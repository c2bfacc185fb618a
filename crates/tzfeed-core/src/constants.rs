/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const CALENDAR_ROUTE_COMPONENT: &str = "calendar";
pub const CALENDAR_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", CALENDAR_ROUTE_COMPONENT);

/// PRODID emitted on every transformed feed, replacing the upstream one.
pub const CANONICAL_PRODID: &str = "PRODID:-//tzfeed//tzfeed 0.1//EN";

/// Content type for served feeds.
pub const CALENDAR_CONTENT_TYPE: &str = "text/calendar; charset=utf-8";
