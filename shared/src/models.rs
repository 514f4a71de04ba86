use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::de::{loose_map, loose_option, loose_text, loose_u32, loose_vec};

/// Response of `POST /eco-agent/product-details`.
///
/// Field names follow the backend verbatim, misspellings included.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ProductScanResult {
    #[serde(default, deserialize_with = "loose_text")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub product_description: Option<String>,
    #[serde(rename = "ingridients_used", default, deserialize_with = "loose_option")]
    pub ingredients: Option<Ingredients>,
    #[serde(default, deserialize_with = "loose_text")]
    pub manufacturing_location: Option<String>,
    #[serde(rename = "enviromental pros and cons", default, deserialize_with = "loose_option")]
    pub environmental_impact: Option<ProsAndCons>,
    #[serde(rename = "health pros and cons", default, deserialize_with = "loose_option")]
    pub health_impact: Option<ProsAndCons>,
}

/// The model answers with either a list or one comma separated sentence.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Ingredients {
    List(Vec<String>),
    Text(String),
}

impl Ingredients {
    pub fn joined(&self) -> String {
        match self {
            Ingredients::List(items) => items.join(", "),
            Ingredients::Text(text) => text.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ProsAndCons {
    #[serde(
        rename = "positive_things_about_the_product",
        default,
        deserialize_with = "loose_vec"
    )]
    pub positives: Vec<String>,
    #[serde(
        rename = "harmful_things_about_the_product",
        default,
        deserialize_with = "loose_vec"
    )]
    pub negatives: Vec<String>,
}

/// DIY difficulty level, keyed by name in [`DiyResult::projects`].
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum Tier {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Response of `POST /diy/generate`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DiyResult {
    #[serde(rename = "Projects", default, deserialize_with = "loose_map")]
    pub projects: HashMap<String, DiyProject>,
}

impl DiyResult {
    pub fn project(&self, tier: Tier) -> Option<&DiyProject> {
        self.projects.get(tier.as_ref())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DiyProject {
    #[serde(rename = "DIY_Product", default, deserialize_with = "loose_text")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub generated_image: Option<String>,
    #[serde(rename = "Image_Generation_Prompt", default, deserialize_with = "loose_text")]
    pub image_prompt: Option<String>,
    #[serde(rename = "Materials_Required", default, deserialize_with = "loose_vec")]
    pub materials: Vec<Material>,
    #[serde(rename = "Steps", default, deserialize_with = "loose_vec")]
    pub steps: Vec<Step>,
    #[serde(rename = "Difficulty_Level", default, deserialize_with = "loose_option")]
    pub difficulty: Option<Difficulty>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Material {
    #[serde(rename = "Material", default, deserialize_with = "loose_text")]
    pub material: Option<String>,
    #[serde(rename = "Quantity", default, deserialize_with = "loose_text")]
    pub quantity: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Step {
    #[serde(rename = "Step_Number", default, deserialize_with = "loose_u32")]
    pub step_number: Option<u32>,
    #[serde(rename = "Description", default, deserialize_with = "loose_text")]
    pub description: Option<String>,
    #[serde(rename = "Estimated_Time", default, deserialize_with = "loose_text")]
    pub estimated_time: Option<String>,
    #[serde(rename = "Safety_Tips", default, deserialize_with = "loose_text")]
    pub safety_tip: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Difficulty {
    #[serde(rename = "Level", default, deserialize_with = "loose_text")]
    pub level: Option<String>,
    #[serde(rename = "Explanation", default, deserialize_with = "loose_text")]
    pub explanation: Option<String>,
}

/// Response of `POST /report-storage/analyse-and-upload`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ReportResult {
    #[serde(rename = "report-category", default, deserialize_with = "loose_text")]
    pub category: Option<String>,
    #[serde(rename = "report-content", default, deserialize_with = "loose_vec")]
    pub extracted_content: Vec<String>,
    #[serde(rename = "report-cloud-path", default, deserialize_with = "loose_text")]
    pub cloud_path: Option<String>,
    #[serde(rename = "user-id", default, deserialize_with = "loose_text")]
    pub user_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_product_scan_wire_keys() {
        let json = r#"{
            "product_name": "Olive Soap",
            "product_description": "Bar soap",
            "ingridients_used": ["water", "oil"],
            "manufacturing_location": "Spain",
            "enviromental pros and cons": {
                "positive_things_about_the_product": ["biodegradable"],
                "harmful_things_about_the_product": null
            }
        }"#;
        let result: ProductScanResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.product_name.as_deref(), Some("Olive Soap"));
        assert_eq!(
            result.ingredients,
            Some(Ingredients::List(vec!["water".into(), "oil".into()]))
        );
        let env = result.environmental_impact.unwrap();
        assert_eq!(env.positives, vec!["biodegradable"]);
        assert!(env.negatives.is_empty());
        assert!(result.health_impact.is_none());
    }

    #[test]
    fn test_ingredients_text_or_list() {
        let list: Ingredients = serde_json::from_str(r#"["water","oil"]"#).unwrap();
        assert_eq!(list.joined(), "water, oil");

        let text: Ingredients = serde_json::from_str(r#""water and oil""#).unwrap();
        assert_eq!(text.joined(), "water and oil");
    }

    #[test]
    fn test_empty_object_decodes() {
        let result: ProductScanResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result, ProductScanResult::default());

        let diy: DiyResult = serde_json::from_str(r#"{"Projects": null}"#).unwrap();
        assert!(diy.projects.is_empty());
    }

    #[test]
    fn test_diy_project_lookup_by_tier() {
        let json = r#"{"Projects": {"Easy": {
            "DIY_Product": "Bottle planter",
            "Materials_Required": [{"Material": "Bottle", "Quantity": 1}],
            "Steps": [{"Step_Number": "1", "Description": "Cut", "Estimated_Time": "5 min", "Safety_Tips": "Gloves"}],
            "Difficulty_Level": {"Level": "Easy", "Explanation": "Few tools"}
        }}}"#;
        let diy: DiyResult = serde_json::from_str(json).unwrap();

        let easy = diy.project(Tier::Easy).unwrap();
        assert_eq!(easy.product_name.as_deref(), Some("Bottle planter"));
        assert_eq!(easy.materials[0].quantity.as_deref(), Some("1"));
        assert_eq!(easy.steps[0].step_number, Some(1));
        assert_eq!(
            easy.difficulty.as_ref().and_then(|d| d.explanation.as_deref()),
            Some("Few tools")
        );
        assert!(diy.project(Tier::Medium).is_none());
        assert!(diy.project(Tier::Hard).is_none());
    }

    #[test]
    fn test_report_wire_keys() {
        let json = r#"{
            "user-id": "demo",
            "report-category": "Blood Test",
            "report-cloud-path": "demo/Blood Test/abc.pdf",
            "report-content": ["Hb 13.5"]
        }"#;
        let report: ReportResult = serde_json::from_str(json).unwrap();
        assert_eq!(report.category.as_deref(), Some("Blood Test"));
        assert_eq!(report.extracted_content, vec!["Hb 13.5"]);
        assert_eq!(report.cloud_path.as_deref(), Some("demo/Blood Test/abc.pdf"));
    }

    #[test]
    fn test_wrongly_typed_product_fields_are_gaps() {
        let result: ProductScanResult = serde_json::from_str(
            r#"{"product_name": "Soap", "ingridients_used": 42, "enviromental pros and cons": "n/a"}"#,
        )
        .unwrap();
        assert_eq!(result.product_name.as_deref(), Some("Soap"));
        assert!(result.ingredients.is_none());
        assert!(result.environmental_impact.is_none());

        let result: ProductScanResult = serde_json::from_str(
            r#"{"health pros and cons": {"positive_things_about_the_product": "None", "harmful_things_about_the_product": [1, "Sugar"]}}"#,
        )
        .unwrap();
        let health = result.health_impact.unwrap();
        assert_eq!(health.positives, vec!["None"]);
        assert_eq!(health.negatives, vec!["Sugar"]);
    }

    #[test]
    fn test_failed_tier_keeps_other_tiers() {
        let json = r#"{"Projects": {
            "Easy": {"DIY_Product": "Planter", "Steps": "none", "Difficulty_Level": "easy"},
            "Hard": "generation failed"
        }}"#;
        let diy: DiyResult = serde_json::from_str(json).unwrap();

        let easy = diy.project(Tier::Easy).unwrap();
        assert_eq!(easy.product_name.as_deref(), Some("Planter"));
        assert!(easy.steps.is_empty());
        assert!(easy.difficulty.is_none());
        assert!(diy.project(Tier::Hard).is_none());
    }

    #[test]
    fn test_report_content_as_lone_text() {
        let report: ReportResult =
            serde_json::from_str(r#"{"report-category": "Blood Test", "report-content": "Hb 13.5"}"#).unwrap();
        assert_eq!(report.extracted_content, vec!["Hb 13.5"]);
    }

    #[test]
    fn test_decode_body_keeps_valid_fields() {
        let result: ProductScanResult =
            crate::de::decode_body(r#"{"product_name": "Soap", "health pros and cons": 7}"#).unwrap();
        assert_eq!(result.product_name.as_deref(), Some("Soap"));
        assert!(result.health_impact.is_none());
    }

    #[test]
    fn test_tier_names() {
        let names: Vec<String> = Tier::iter().map(|t| t.to_string()).collect();
        assert_eq!(names, vec!["Easy", "Medium", "Hard"]);
        assert_eq!(Tier::from_str("Hard").unwrap(), Tier::Hard);
        assert_eq!(Tier::default(), Tier::Easy);
    }
}
