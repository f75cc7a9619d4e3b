use crate::domain::a002_material_reference::aggregate::MaterialReferenceId;
use crate::domain::common::AggregateRoot;
use crate::shared::validation::ValidationRules;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Id of a color (`colores`)
    ColorId
);

/// Color available for one material reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub id: ColorId,
    #[serde(rename = "referencia_id")]
    pub reference_id: MaterialReferenceId,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Color {
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}

impl AggregateRoot for Color {
    type Id = ColorId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "colores"
    }

    fn element_name() -> &'static str {
        "Color"
    }

    fn list_name() -> &'static str {
        "Colores"
    }
}

/// Path listing the colors of one reference
pub fn by_reference_path(reference_id: MaterialReferenceId) -> String {
    format!("/api/v1/colores/referencia/{}", reference_id)
}

/// Create form for a color
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorDto {
    #[serde(rename = "referencia_id")]
    pub reference_id: Option<MaterialReferenceId>,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
}

impl ColorDto {
    pub const CODE_RULES: ValidationRules = ValidationRules::text(3, 50);
    pub const NAME_RULES: ValidationRules = ValidationRules::text(3, 100);

    pub fn validate(&self) -> Result<(), String> {
        if self.reference_id.is_none() {
            return Err("Seleccione una referencia".to_string());
        }
        Self::CODE_RULES.validate_string(&self.code, "Código")?;
        Self::NAME_RULES.validate_string(&self.name, "Nombre")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_and_labels() {
        let json = r#"{"id":9,"referencia_id":5,"codigo":"BLK-001-WHT","nombre":"Blanco Perla","fecha_creacion":"2024-05-02T10:00:00"}"#;
        let color: Color = serde_json::from_str(json).unwrap();
        assert_eq!(color.reference_id, MaterialReferenceId(5));
        assert_eq!(color.label(), "BLK-001-WHT - Blanco Perla");
    }

    #[test]
    fn test_dto_requires_reference() {
        let dto = ColorDto {
            reference_id: None,
            code: "WHT".into(),
            name: "Blanco".into(),
        };
        assert_eq!(dto.validate().unwrap_err(), "Seleccione una referencia");
    }
}
