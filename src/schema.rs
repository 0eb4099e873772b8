//! Key, layer and resource constants for the Vortexa API.
//! Single source of truth - exported to Python via PyO3 when the `python` feature is on.

// ── Shared entity keys ──────────────────────────────────────────────────────
pub mod keys {
    pub const LAYER: &str = "layer";
    pub const EVENT_TYPE: &str = "event_type";
    pub const VESSELS: &str = "vessels";
    pub const VESSEL: &str = "vessel";
}

// ── Positional lists ────────────────────────────────────────────────────────
pub mod positional {
    /// Fields whose lists of objects carry no `layer` or `event_type` tag and
    /// are keyed by index instead.
    pub const FIELDS: [&str; 6] = ["vessels", "cargoes", "hierarchy", "exclusion_rule", "parent", "tags"];
}

// ── Vessel slots ────────────────────────────────────────────────────────────
pub mod vessel {
    /// Emitted for every vessel slot of a flattened record, null when absent.
    pub const OPTIONAL_FIELDS: [&str; 6] =
        ["fixture_id", "year", "scrubber", "flag", "ice_class", "propulsion"];

    pub const AVAILABLE_VESSEL_CLASSES: [&str; 13] = [
        "tiny_tanker",
        "general_purpose",
        "handysize",
        "handymax",
        "panamax",
        "aframax",
        "suezmax",
        "vlcc_plus",
        "sgc",
        "mgc",
        "lgc",
        "vlgc",
        "vlcc",
    ];
}

// ── Layers ──────────────────────────────────────────────────────────────────
pub mod layer {
    pub const COMMERCIAL_OWNER: &str = "commercial_owner";
    pub const CHARTERER: &str = "charterer";
    pub const TIME_CHARTERER: &str = "time_charterer";

    pub const GROUP: &str = "group";
    pub const GROUP_PRODUCT: &str = "group_product";
    pub const CATEGORY: &str = "category";
    pub const GRADE: &str = "grade";

    pub const COUNTRY: &str = "country";
    pub const REGION: &str = "region";
    pub const PORT: &str = "port";
    pub const STS_ZONE: &str = "sts_zone";
}

// ── Cargo event types ───────────────────────────────────────────────────────
pub mod event_type {
    pub const PORT_LOAD: &str = "cargo_port_load_event";
    pub const PORT_UNLOAD: &str = "cargo_port_unload_event";
    pub const STS: &str = "cargo_sts_event";
    pub const STORAGE: &str = "cargo_storage_event";
    pub const FSO: &str = "cargo_fso_event";
}

// ── API resources ───────────────────────────────────────────────────────────
pub mod resource {
    pub const CARGO_MOVEMENTS: &str = "/cargo-movements/search";
    pub const VESSEL_MOVEMENTS: &str = "/vessel-movements/search";
    pub const CARGO_TIMESERIES: &str = "/cargo-movements/breakdown-timeseries";
    pub const VESSELS_REFERENCE: &str = "/reference/vessels";
    pub const PRODUCTS_REFERENCE: &str = "/reference/products";
    pub const GEOGRAPHIES_REFERENCE: &str = "/reference/geographies";
    pub const CORPORATIONS_REFERENCE: &str = "/reference/charterers";
}

// ── Default table columns ───────────────────────────────────────────────────
pub mod columns {
    pub const CARGO_MOVEMENTS: [&str; 8] = [
        "events.cargo_port_load_event.0.location.port.label",
        "events.cargo_port_unload_event.0.location.port.label",
        "product.group.label",
        "product.grade.label",
        "quantity",
        "vessels.0.name",
        "events.cargo_port_load_event.0.end_timestamp",
        "events.cargo_port_unload_event.0.start_timestamp",
    ];

    pub const VESSEL_MOVEMENTS: [&str; 10] = [
        "vessel.name",
        "vessel.imo",
        "vessel.mmsi",
        "vessel.vessel_class",
        "origin.location.port.label",
        "destination.location.port.label",
        "origin.start_timestamp",
        "destination.end_timestamp",
        "cargoes.0.product.group.label",
        "vessel.corporate_entities.charterer.label",
    ];

    pub const VESSELS: [&str; 4] = ["id", "name", "imo", "vessel_class"];
    pub const PRODUCTS: [&str; 4] = ["id", "name", "layer.0", "parent.0.name"];
    pub const GEOGRAPHIES: [&str; 3] = ["id", "name", "layer.0"];
    pub const CORPORATIONS: [&str; 3] = ["id", "name", "corporate_entity_type.0"];
}

// ── Time series columns ─────────────────────────────────────────────────────
pub mod timeseries {
    pub const KEY: &str = "key";
    pub const VALUE: &str = "value";
    pub const COUNT: &str = "count";

    pub const ALL: [&str; 3] = [KEY, VALUE, COUNT];

    /// Bucket keys as returned by the API, e.g. `2018-01-01T00:00:00.000Z`.
    pub const KEY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
}
