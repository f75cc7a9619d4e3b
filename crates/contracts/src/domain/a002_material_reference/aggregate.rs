use crate::domain::a001_material_type::aggregate::MaterialTypeId;
use crate::domain::common::AggregateRoot;
use crate::shared::validation::ValidationRules;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Id of a material reference (`referencias`)
    MaterialReferenceId
);

/// Concrete purchasable variant of a material type, priced per unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialReference {
    pub id: MaterialReferenceId,
    #[serde(rename = "tipo_insumo_id")]
    pub material_type_id: MaterialTypeId,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio_unitario")]
    pub unit_price: f64,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<NaiveDateTime>,
}

impl MaterialReference {
    /// "CODE - Name", the option text used in pickers
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}

impl AggregateRoot for MaterialReference {
    type Id = MaterialReferenceId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "referencias"
    }

    fn element_name() -> &'static str {
        "Referencia"
    }

    fn list_name() -> &'static str {
        "Referencias"
    }
}

/// Path listing the references of one material type
pub fn by_type_path(material_type_id: MaterialTypeId) -> String {
    format!("/api/v1/referencias/tipo/{}", material_type_id)
}

/// Create/update form for a reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialReferenceDto {
    #[serde(skip)]
    pub id: Option<MaterialReferenceId>,
    #[serde(rename = "tipo_insumo_id")]
    pub material_type_id: Option<MaterialTypeId>,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio_unitario")]
    pub unit_price: f64,
}

impl MaterialReferenceDto {
    pub const CODE_RULES: ValidationRules = ValidationRules::text(3, 50);
    pub const NAME_RULES: ValidationRules = ValidationRules::text(3, 100);
    pub const PRICE_RULES: ValidationRules = ValidationRules::positive();

    pub fn validate(&self) -> Result<(), String> {
        if self.material_type_id.is_none() {
            return Err("Seleccione un tipo de insumo".to_string());
        }
        Self::CODE_RULES.validate_string(&self.code, "Código")?;
        Self::NAME_RULES.validate_string(&self.name, "Nombre")?;
        Self::PRICE_RULES.validate_number(self.unit_price, "Precio unitario")?;
        Ok(())
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }
}

impl From<&MaterialReference> for MaterialReferenceDto {
    fn from(r: &MaterialReference) -> Self {
        Self {
            id: Some(r.id),
            material_type_id: Some(r.material_type_id),
            code: r.code.clone(),
            name: r.name.clone(),
            unit_price: r.unit_price,
        }
    }
}
