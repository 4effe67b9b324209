use crate::content::application::domain::entities::{ContentItem, ContentKind, ContentSource};

use super::sea_orm_entity::content_items;

/// The row keeps two nullable columns; the domain insists on exactly
/// one being present and on it agreeing with `kind`.
pub fn content_model_to_domain(model: content_items::Model) -> Result<ContentItem, String> {
    let kind = ContentKind::parse(&model.kind)
        .ok_or_else(|| format!("Unknown content kind '{}' on item {}", model.kind, model.id))?;

    let source = match (model.file_path, model.youtube_url) {
        (Some(path), None) => {
            if kind == ContentKind::Youtube {
                return Err(format!("YouTube item {} carries a file path", model.id));
            }
            ContentSource::File { path }
        }
        (None, Some(url)) => {
            if kind != ContentKind::Youtube {
                return Err(format!("File item {} carries a YouTube url", model.id));
            }
            ContentSource::YouTube { url }
        }
        (Some(_), Some(_)) => {
            return Err(format!("Item {} has both a file path and a url", model.id))
        }
        (None, None) => return Err(format!("Item {} has neither file path nor url", model.id)),
    };

    Ok(ContentItem {
        id: model.id,
        title: model.title,
        slug: model.slug,
        description: model.description,
        kind,
        source,
        cover_image_path: model.cover_image_path,
        uploaded_by: model.uploaded_by,
        is_featured: model.is_featured,
        download_count: model.download_count,
        views_count: model.views_count,
        uploaded_at: model.uploaded_at.into(),
        updated_at: model.updated_at.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn model(
        kind: &str,
        file_path: Option<&str>,
        youtube_url: Option<&str>,
    ) -> content_items::Model {
        content_items::Model {
            id: Uuid::new_v4(),
            title: "Algebra".to_string(),
            slug: "algebra".to_string(),
            description: String::new(),
            kind: kind.to_string(),
            file_path: file_path.map(|s| s.to_string()),
            youtube_url: youtube_url.map(|s| s.to_string()),
            cover_image_path: None,
            uploaded_by: Uuid::new_v4(),
            is_featured: false,
            download_count: 0,
            views_count: 0,
            uploaded_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    #[test]
    fn file_row_converts() {
        let item = content_model_to_domain(model("pdf", Some("content/pdf/a.pdf"), None)).unwrap();
        assert_eq!(item.kind, ContentKind::Pdf);
        assert_eq!(item.source.file_path(), Some("content/pdf/a.pdf"));
    }

    #[test]
    fn youtube_row_converts() {
        let item =
            content_model_to_domain(model("youtube", None, Some("https://youtu.be/x"))).unwrap();
        assert_eq!(item.kind, ContentKind::Youtube);
        assert!(item.source.youtube_url().is_some());
    }

    #[test]
    fn inconsistent_rows_are_rejected() {
        assert!(content_model_to_domain(model("pdf", None, None)).is_err());
        assert!(content_model_to_domain(model("pdf", Some("a"), Some("b"))).is_err());
        assert!(content_model_to_domain(model("pdf", None, Some("https://youtu.be/x"))).is_err());
        assert!(content_model_to_domain(model("youtube", Some("a"), None)).is_err());
        assert!(content_model_to_domain(model("podcast", Some("a"), None)).is_err());
    }
}
