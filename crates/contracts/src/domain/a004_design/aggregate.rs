use crate::domain::a001_material_type::aggregate::{MaterialType, MaterialTypeId};
use crate::domain::common::AggregateRoot;
use crate::shared::validation::ValidationRules;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(
    /// Id of a curtain design (`disenos`)
    DesignId
);

/// Fabrication complexity declared on a design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Bajo,
    #[default]
    Medio,
    Alto,
}

impl Complexity {
    pub fn code(&self) -> &'static str {
        match self {
            Complexity::Bajo => "bajo",
            Complexity::Medio => "medio",
            Complexity::Alto => "alto",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Complexity::Bajo => "Baja",
            Complexity::Medio => "Media",
            Complexity::Alto => "Alta",
        }
    }

    pub fn all() -> Vec<Complexity> {
        vec![Complexity::Bajo, Complexity::Medio, Complexity::Alto]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "bajo" => Some(Complexity::Bajo),
            "medio" => Some(Complexity::Medio),
            "alto" => Some(Complexity::Alto),
            _ => None,
        }
    }
}

/// One bill-of-materials line: which material type, and how much per meter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignMaterialRequirement {
    #[serde(rename = "tipo_insumo_id")]
    pub material_type_id: MaterialTypeId,
    #[serde(rename = "cantidad_por_metro")]
    pub quantity_per_meter: f64,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
}

/// Curtain design: a bill-of-materials template plus fixed labor cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub id: DesignId,
    /// Human code, e.g. "CORTINA-001"
    #[serde(rename = "id_diseno")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "costo_mano_obra")]
    pub labor_cost: f64,
    #[serde(rename = "complejidad", default)]
    pub complexity: Option<Complexity>,
    #[serde(rename = "tipos_insumo", default)]
    pub requirements: Vec<DesignMaterialRequirement>,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<NaiveDateTime>,
}

impl AggregateRoot for Design {
    type Id = DesignId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "disenos"
    }

    fn element_name() -> &'static str {
        "Diseño"
    }

    fn list_name() -> &'static str {
        "Diseños"
    }
}

/// Editable bill-of-materials row; the type stays empty until picked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementRow {
    #[serde(rename = "tipo_insumo_id")]
    pub material_type_id: Option<MaterialTypeId>,
    #[serde(rename = "cantidad_por_metro")]
    pub quantity_per_meter: f64,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
}

impl Default for RequirementRow {
    fn default() -> Self {
        Self {
            material_type_id: None,
            quantity_per_meter: 1.0,
            description: None,
        }
    }
}

/// Create/update form for a design
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignDto {
    #[serde(skip)]
    pub id: Option<DesignId>,
    #[serde(rename = "id_diseno")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "costo_mano_obra")]
    pub labor_cost: f64,
    #[serde(rename = "complejidad")]
    pub complexity: Complexity,
    #[serde(rename = "tipos_insumo")]
    pub requirements: Vec<RequirementRow>,
}

impl DesignDto {
    pub const CODE_RULES: ValidationRules = ValidationRules::text(3, 50);
    pub const NAME_RULES: ValidationRules = ValidationRules::text(3, 100);
    pub const DESCRIPTION_RULES: ValidationRules = ValidationRules::optional_text(500);
    pub const LABOR_RULES: ValidationRules = ValidationRules::positive();
    pub const QUANTITY_RULES: ValidationRules = ValidationRules::positive();

    /// Empty form with one requirement row ready to fill
    pub fn new_blank() -> Self {
        Self {
            requirements: vec![RequirementRow::default()],
            ..Default::default()
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// Check the form against the schema rules and the known material types
    pub fn validate(&self, material_types: &[MaterialType]) -> Result<(), String> {
        Self::CODE_RULES.validate_string(&self.code, "Código")?;
        Self::NAME_RULES.validate_string(&self.name, "Nombre")?;
        Self::DESCRIPTION_RULES
            .validate_string(self.description.as_deref().unwrap_or_default(), "Descripción")?;
        Self::LABOR_RULES.validate_number(self.labor_cost, "Costo de mano de obra")?;

        if self.requirements.is_empty() {
            return Err("El diseño debe tener al menos un tipo de insumo".to_string());
        }

        for (index, row) in self.requirements.iter().enumerate() {
            let label = format!("Insumo #{}", index + 1);
            let type_id = row
                .material_type_id
                .ok_or_else(|| format!("{}: seleccione un tipo de insumo", label))?;
            if !material_types.iter().any(|t| t.id == type_id) {
                return Err(format!("{}: el tipo de insumo {} no existe", label, type_id));
            }
            Self::QUANTITY_RULES.validate_number(row.quantity_per_meter, &label)?;
            Self::DESCRIPTION_RULES
                .validate_string(row.description.as_deref().unwrap_or_default(), &label)?;
        }

        Ok(())
    }

    pub fn add_requirement(&mut self) {
        self.requirements.push(RequirementRow::default());
    }

    pub fn remove_requirement(&mut self, index: usize) {
        if index < self.requirements.len() {
            self.requirements.remove(index);
        }
    }
}

impl From<&Design> for DesignDto {
    fn from(d: &Design) -> Self {
        Self {
            id: Some(d.id),
            code: d.code.clone(),
            name: d.name.clone(),
            description: d.description.clone(),
            labor_cost: d.labor_cost,
            complexity: d.complexity.unwrap_or_default(),
            requirements: d
                .requirements
                .iter()
                .map(|r| RequirementRow {
                    material_type_id: Some(r.material_type_id),
                    quantity_per_meter: r.quantity_per_meter,
                    description: r.description.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn material_types() -> Vec<MaterialType> {
        vec![
            MaterialType {
                id: MaterialTypeId(1),
                name: "Tela".into(),
                description: None,
                created_at: None,
            },
            MaterialType {
                id: MaterialTypeId(2),
                name: "Riel".into(),
                description: None,
                created_at: None,
            },
        ]
    }

    fn valid_dto() -> DesignDto {
        DesignDto {
            id: None,
            code: "CORTINA-001".into(),
            name: "Ondas".into(),
            description: None,
            labor_cost: 45000.0,
            complexity: Complexity::Medio,
            requirements: vec![RequirementRow {
                material_type_id: Some(MaterialTypeId(1)),
                quantity_per_meter: 2.5,
                description: Some("Tela principal".into()),
            }],
        }
    }

    #[test]
    fn test_deserializes_design_with_requirements() {
        let json = r#"{
            "id": 3, "id_diseno": "CORTINA-003", "nombre": "Romana",
            "descripcion": null, "costo_mano_obra": 30000.0, "complejidad": "alto",
            "version": "1.0",
            "fecha_creacion": "2024-01-01T00:00:00", "fecha_actualizacion": "2024-01-01T00:00:00",
            "tipos_insumo": [
                {"tipo_insumo_id": 1, "referencia_id": null, "color_id": null, "cantidad_por_metro": 2.0, "descripcion": "Tela"},
                {"tipo_insumo_id": 2, "cantidad_por_metro": 1.0, "descripcion": null}
            ]
        }"#;
        let design: Design = serde_json::from_str(json).unwrap();
        assert_eq!(design.complexity, Some(Complexity::Alto));
        assert_eq!(
            design
                .requirements
                .iter()
                .map(|r| r.material_type_id)
                .collect::<Vec<_>>(),
            vec![MaterialTypeId(1), MaterialTypeId(2)]
        );
    }

    #[test]
    fn test_validate_requires_at_least_one_requirement() {
        let mut dto = valid_dto();
        assert_eq!(dto.validate(&material_types()), Ok(()));
        dto.requirements.clear();
        assert_eq!(
            dto.validate(&material_types()).unwrap_err(),
            "El diseño debe tener al menos un tipo de insumo"
        );
    }

    #[test]
    fn test_validate_rejects_unknown_material_type() {
        let mut dto = valid_dto();
        dto.requirements[0].material_type_id = Some(MaterialTypeId(99));
        assert_eq!(
            dto.validate(&material_types()).unwrap_err(),
            "Insumo #1: el tipo de insumo 99 no existe"
        );
    }

    #[test]
    fn test_validate_rejects_non_positive_quantity() {
        let mut dto = valid_dto();
        dto.requirements[0].quantity_per_meter = 0.0;
        assert!(dto.validate(&material_types()).is_err());
    }

    #[test]
    fn test_add_and_remove_rows() {
        let mut dto = DesignDto::new_blank();
        assert_eq!(dto.requirements.len(), 1);
        dto.add_requirement();
        dto.remove_requirement(0);
        dto.remove_requirement(5);
        assert_eq!(dto.requirements.len(), 1);
    }
}
