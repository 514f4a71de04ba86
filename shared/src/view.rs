//! Maps backend results to what the screens display.
//!
//! Missing text becomes empty, missing lists become empty lists, and a
//! section whose object is missing is `None` so the screen leaves it out.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::models::{DiyProject, DiyResult, ProductScanResult, ProsAndCons, ReportResult, Tier};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductScanView {
    pub name: String,
    pub description: String,
    pub ingredients: String,
    pub manufacturing_location: String,
    pub environmental: Option<ImpactView>,
    pub health: Option<ImpactView>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImpactView {
    pub positives: Vec<String>,
    pub negatives: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiyProjectView {
    pub title: String,
    pub image: Option<ImageView>,
    pub materials: Vec<MaterialView>,
    pub steps: Vec<StepView>,
    pub difficulty: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialView {
    pub material: String,
    pub quantity: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepView {
    pub number: String,
    pub description: String,
    pub estimated_time: String,
    pub safety_tip: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportView {
    pub category: String,
    pub items: Vec<String>,
    pub stored_at: Option<String>,
    /// Account the backend filed the report under.
    pub owner: Option<String>,
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl From<&ProsAndCons> for ImpactView {
    fn from(section: &ProsAndCons) -> Self {
        Self {
            positives: section.positives.clone(),
            negatives: section.negatives.clone(),
        }
    }
}

impl From<&ProductScanResult> for ProductScanView {
    fn from(result: &ProductScanResult) -> Self {
        Self {
            name: text(&result.product_name),
            description: text(&result.product_description),
            ingredients: result.ingredients.as_ref().map(|i| i.joined()).unwrap_or_default(),
            manufacturing_location: text(&result.manufacturing_location),
            environmental: result.environmental_impact.as_ref().map(ImpactView::from),
            health: result.health_impact.as_ref().map(ImpactView::from),
        }
    }
}

impl From<&DiyProject> for DiyProjectView {
    fn from(project: &DiyProject) -> Self {
        Self {
            title: text(&project.product_name),
            image: project.generated_image.as_deref().and_then(|data| {
                image_data_url(data).map(|src| ImageView {
                    src,
                    alt: project
                        .image_prompt
                        .clone()
                        .unwrap_or_else(|| "Generated".to_string()),
                })
            }),
            materials: project
                .materials
                .iter()
                .map(|m| MaterialView {
                    material: text(&m.material),
                    quantity: text(&m.quantity),
                })
                .collect(),
            steps: project
                .steps
                .iter()
                .enumerate()
                .map(|(i, s)| StepView {
                    number: s.step_number.unwrap_or(i as u32 + 1).to_string(),
                    description: text(&s.description),
                    estimated_time: text(&s.estimated_time),
                    safety_tip: text(&s.safety_tip),
                })
                .collect(),
            difficulty: project
                .difficulty
                .as_ref()
                .map(|d| text(&d.explanation))
                .unwrap_or_default(),
        }
    }
}

impl From<&ReportResult> for ReportView {
    fn from(report: &ReportResult) -> Self {
        Self {
            category: text(&report.category),
            items: report.extracted_content.clone(),
            stored_at: report.cloud_path.clone().filter(|p| !p.is_empty()),
            owner: report.user_id.clone().filter(|u| !u.trim().is_empty()),
        }
    }
}

/// Project panel for `tier`, or `None` when the backend did not produce one.
pub fn diy_project_view(result: &DiyResult, tier: Tier) -> Option<DiyProjectView> {
    result.project(tier).map(DiyProjectView::from)
}

/// Sniffs the image type from its leading bytes. Unknown data is assumed PNG.
pub fn image_mime_type(bytes: &[u8]) -> &'static str {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => "image/png",
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        _ => "image/png",
    }
}

/// Decodes a base64 image into a `data:` URL. Undecodable input yields `None`.
pub fn image_data_url(encoded: &str) -> Option<String> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }
    match STANDARD.decode(&compact) {
        Ok(bytes) if !bytes.is_empty() => {
            Some(format!("data:{};base64,{}", image_mime_type(&bytes), compact))
        }
        Ok(_) => None,
        Err(e) => {
            log::warn!("Skipping undecodable generated image: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Ingredients, Material, Step};

    const PNG_B64: &str = "iVBORw0KGgoAAAANSUhEUg==";
    const JPEG_B64: &str = "/9j/4AAQSkZJRg==";

    #[test]
    fn test_ingredients_list_is_joined() {
        let result = ProductScanResult {
            ingredients: Some(Ingredients::List(vec!["water".into(), "oil".into()])),
            ..Default::default()
        };
        assert_eq!(ProductScanView::from(&result).ingredients, "water, oil");
    }

    #[test]
    fn test_ingredients_text_is_kept() {
        let result = ProductScanResult {
            ingredients: Some(Ingredients::Text("water".into())),
            ..Default::default()
        };
        assert_eq!(ProductScanView::from(&result).ingredients, "water");
    }

    #[test]
    fn test_absent_sections_are_omitted() {
        let view = ProductScanView::from(&ProductScanResult::default());
        assert!(view.environmental.is_none());
        assert!(view.health.is_none());
        assert_eq!(view.name, "");
        assert_eq!(view.ingredients, "");
    }

    #[test]
    fn test_present_section_with_empty_lists() {
        let result = ProductScanResult {
            health_impact: Some(ProsAndCons::default()),
            ..Default::default()
        };
        let health = ProductScanView::from(&result).health.unwrap();
        assert!(health.positives.is_empty());
        assert!(health.negatives.is_empty());
    }

    #[test]
    fn test_missing_tiers_render_nothing() {
        let json = r#"{"Projects": {"Easy": {"DIY_Product": "Planter"}}}"#;
        let result: DiyResult = serde_json::from_str(json).unwrap();

        assert_eq!(diy_project_view(&result, Tier::Easy).unwrap().title, "Planter");
        assert!(diy_project_view(&result, Tier::Medium).is_none());
        assert!(diy_project_view(&result, Tier::Hard).is_none());
    }

    #[test]
    fn test_diy_project_mapping() {
        let project = DiyProject {
            product_name: Some("Lamp".into()),
            generated_image: Some(PNG_B64.into()),
            image_prompt: Some("A glowing lamp".into()),
            materials: vec![Material {
                material: Some("Jar".into()),
                quantity: None,
            }],
            steps: vec![
                Step {
                    step_number: Some(1),
                    description: Some("Clean".into()),
                    estimated_time: Some("5 min".into()),
                    safety_tip: Some("Careful".into()),
                },
                Step::default(),
            ],
            difficulty: Some(Difficulty {
                level: Some("Easy".into()),
                explanation: Some("Simple".into()),
            }),
        };
        let view = DiyProjectView::from(&project);

        let image = view.image.unwrap();
        assert_eq!(image.src, format!("data:image/png;base64,{}", PNG_B64));
        assert_eq!(image.alt, "A glowing lamp");
        assert_eq!(view.materials[0].material, "Jar");
        assert_eq!(view.materials[0].quantity, "");
        assert_eq!(view.steps[0].number, "1");
        assert_eq!(view.steps[1].number, "2");
        assert_eq!(view.difficulty, "Simple");
    }

    #[test]
    fn test_image_mime_sniffing() {
        assert_eq!(image_data_url(JPEG_B64).unwrap(), format!("data:image/jpeg;base64,{}", JPEG_B64));
        assert_eq!(image_mime_type(b"GIF89a"), "image/gif");
        assert_eq!(image_mime_type(b"RIFF\0\0\0\0WEBPVP8 "), "image/webp");
        assert_eq!(image_mime_type(b"plain"), "image/png");
    }

    #[test]
    fn test_bad_image_is_omitted() {
        assert!(image_data_url("not base64 !!").is_none());
        assert!(image_data_url("").is_none());
        let project = DiyProject {
            generated_image: Some("%%%".into()),
            ..Default::default()
        };
        assert!(DiyProjectView::from(&project).image.is_none());
    }

    #[test]
    fn test_image_with_line_breaks() {
        let wrapped = "iVBORw0K\nGgoAAAANSUhEUg==";
        assert_eq!(image_data_url(wrapped).unwrap(), format!("data:image/png;base64,{}", PNG_B64));
    }

    #[test]
    fn test_report_mapping() {
        let report = ReportResult {
            category: Some("Blood Test".into()),
            extracted_content: vec!["Hb 13.5".into()],
            cloud_path: Some(String::new()),
            user_id: Some("demo".into()),
        };
        let view = ReportView::from(&report);
        assert_eq!(view.category, "Blood Test");
        assert_eq!(view.items, vec!["Hb 13.5"]);
        assert!(view.stored_at.is_none());
        assert_eq!(view.owner.as_deref(), Some("demo"));
    }

    #[test]
    fn test_report_without_owner() {
        let report = ReportResult {
            user_id: Some("  ".into()),
            ..Default::default()
        };
        assert!(ReportView::from(&report).owner.is_none());
        assert!(ReportView::from(&ReportResult::default()).owner.is_none());
    }
}
