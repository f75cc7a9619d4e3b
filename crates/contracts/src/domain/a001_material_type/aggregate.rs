use crate::domain::common::AggregateRoot;
use crate::shared::validation::ValidationRules;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Id of a material type (`tipos-insumo`)
    MaterialTypeId
);

/// Kind of material a design consumes: fabric, rail, tape...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialType {
    pub id: MaterialTypeId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<NaiveDateTime>,
}

impl AggregateRoot for MaterialType {
    type Id = MaterialTypeId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "tipos-insumo"
    }

    fn element_name() -> &'static str {
        "Tipo de insumo"
    }

    fn list_name() -> &'static str {
        "Tipos de insumo"
    }
}

/// Create form for a material type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialTypeDto {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
}

impl MaterialTypeDto {
    pub const NAME_RULES: ValidationRules = ValidationRules::text(3, 100);
    pub const DESCRIPTION_RULES: ValidationRules = ValidationRules::optional_text(500);

    pub fn validate(&self) -> Result<(), String> {
        Self::NAME_RULES.validate_string(&self.name, "Nombre")?;
        Self::DESCRIPTION_RULES
            .validate_string(self.description.as_deref().unwrap_or_default(), "Descripción")?;
        Ok(())
    }

    /// Trim text and turn a blank description into `None`
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_api_payload() {
        let json = r#"{"id":3,"nombre":"Tela","descripcion":null,"fecha_creacion":"2024-03-15T14:02:26.123456","fecha_actualizacion":"2024-03-15T14:02:26.123456"}"#;
        let item: MaterialType = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, MaterialTypeId(3));
        assert_eq!(item.name, "Tela");
        assert!(item.created_at.is_some());
        assert_eq!(MaterialType::collection_path(), "/api/v1/tipos-insumo/");
        assert_eq!(MaterialType::element_path(&item.id), "/api/v1/tipos-insumo/3");
    }

    #[test]
    fn test_dto_validation() {
        let dto = MaterialTypeDto {
            name: "Ri".into(),
            description: None,
        };
        assert!(dto.validate().is_err());

        let dto = MaterialTypeDto {
            name: " Riel ".into(),
            description: Some("   ".into()),
        }
        .normalized();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.name, "Riel");
        assert_eq!(dto.description, None);
    }
}
