use crate::ads::application::domain::entities::{Ad, AdPosition};

use super::sea_orm_entity::ads;

pub fn ad_model_to_domain(model: ads::Model) -> Result<Ad, String> {
    let position = AdPosition::parse(&model.position)
        .ok_or_else(|| format!("Unknown ad position '{}' on ad {}", model.position, model.id))?;

    Ok(Ad {
        id: model.id,
        title: model.title,
        description: model.description,
        image_path: model.image_path,
        target_url: model.target_url,
        cta_text: model.cta_text,
        position,
        is_active: model.is_active,
        show_timer: model.show_timer,
        start_date: model.start_date.map(Into::into),
        end_date: model.end_date.map(Into::into),
        created_by: model.created_by,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn unknown_position_is_rejected() {
        let model = ads::Model {
            id: Uuid::new_v4(),
            title: "Ad".to_string(),
            description: String::new(),
            image_path: None,
            target_url: "https://example.com".to_string(),
            cta_text: "Learn More".to_string(),
            position: "footer".to_string(),
            is_active: true,
            show_timer: false,
            start_date: None,
            end_date: None,
            created_by: None,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        };
        assert!(ad_model_to_domain(model).is_err());
    }
}
