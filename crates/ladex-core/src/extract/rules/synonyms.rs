//! Hand-curated synonym tables for the target field labels.
//!
//! Entries are lowercase and matched as substrings of the field key, so table
//! ORDER is part of the contract: specific labels sit first and the short
//! catch-all fragments ("in", "out", "bol") sit last, where they only fire
//! after everything else missed. Collected from production documents across
//! many carriers; extend at the end of the relevant section rather than
//! reordering.

/// Label fragments that identify the bill-of-lading number.
pub const BOL_SYNONYMS: &[&str] = &[
    "shippers bol no",
    "shipper bol no",
    "shippers bol number",
    "shipper bol number",
    "bol number",
    "bol no",
    "bol nbr",
    "bol #",
    "bol#",
    "b.o.l. number",
    "b.o.l. no",
    "b.o.l. #",
    "b.o.l #",
    "b/l number",
    "b/l no",
    "b/l #",
    "bill of lading number",
    "bill of lading no",
    "bill of lading #",
    "bill of lading#",
    "bill of lading",
    "lading number",
    "lading no",
    "waybill number",
    "waybill no",
    "waybill #",
    "waybill",
    "way bill number",
    "way bill no",
    "straight bill of lading",
    "master bill of lading",
    "house bill of lading",
    "shipment number",
    "shipment no",
    "shipment id",
    "shipment #",
    "shipping document number",
    "shipping document no",
    "document number",
    "load number",
    "load no",
    "load id",
    "order bol",
    "carrier bol",
    "pro number",
    "pro #",
    "bol",
];

/// Free-text fragments for a BOL number embedded in a longer summary value
/// (e.g. "Bill of Lading # 4471 attached"). Scanned over VALUES, not keys,
/// and only after both key passes missed.
pub const BOL_TEXT_FRAGMENTS: &[&str] = &["of lading #", "lading #"];

/// Label fragments that identify the load start ("card in") time.
pub const CARD_IN_SYNONYMS: &[&str] = &[
    "load start time",
    "load start",
    "loading start",
    "start load",
    "card in time",
    "card in",
    "card-in",
    "time in",
    "bay in time",
    "bay in",
    "gate in",
    "check in",
    "checkin",
    "arrival time",
    "arrived",
    "time of arrival",
    "start time:",
    "start time",
    "time start",
    "in",
];

/// Label fragments that identify the load end ("card out") time.
pub const CARD_OUT_SYNONYMS: &[&str] = &[
    "load end time",
    "load end",
    "load finish",
    "loading end",
    "end load",
    "card out time",
    "card out",
    "card-out",
    "time out",
    "bay out time",
    "bay out",
    "gate out",
    "check out",
    "checkout",
    "departure time",
    "departed",
    "time of departure",
    "completion time",
    "completed time",
    "end time:",
    "end time",
    "time end",
    "finish time",
    "out",
];
