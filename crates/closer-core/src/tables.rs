//! Table and column names of the record store schema.
//!
//! The schema is shared with the other workers of the outreach pipeline, so the
//! names are fixed by the store rather than by this crate.

pub const CAMPAIGNS: &str = "campanas";
pub const PROSPECTS: &str = "prospectos";
pub const SALES_BIBLE: &str = "argumentarios_venta";

pub mod campaign {
    pub const ID: &str = "id";
    pub const STATUS: &str = "estado_campana";
    pub const CRITERIA: &str = "criterio_busqueda";
}

pub mod prospect {
    pub const ID: &str = "prospecto_id";
    pub const CAMPAIGN_ID: &str = "campana_id";
    pub const BUSINESS_NAME: &str = "nombre_negocio";
    pub const STATUS: &str = "estado_prospecto";
    pub const WEBSITE: &str = "sitio_web";
}

pub mod sales_bible {
    pub const ID: &str = "id";
    pub const CAMPAIGN_ID: &str = "campana_id";
    pub const PAIN_KEY: &str = "dolor_clave";
    pub const PAIN_DESCRIPTION: &str = "descripcion_dolor";
    pub const REBUTTAL: &str = "argumentario_solucion";
}
