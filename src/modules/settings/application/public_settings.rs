use serde::Serialize;
use utoipa::ToSchema;

use super::settings::{Settings, SocialLink, Theme};

/// Browser-safe projection of [`Settings`].
///
/// SMTP host and credentials never leave the process; the client only learns
/// whether mail delivery is configured.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicSettings {
    // Portfolio
    pub portal_title: String,
    pub portal_description: String,
    pub default_name: String,
    pub default_email: String,
    pub default_phone: String,
    pub default_location: String,
    pub default_github: String,
    pub default_linkedin: String,
    pub avatar_url: String,

    // UI
    #[schema(value_type = String)]
    pub theme: Theme,
    pub primary_color: String,
    pub background_color: String,
    pub text_color: String,

    // Contact form
    pub enable_contact_form: bool,
    pub contact_email_recipient: String,
    pub smtp_configured: bool,

    // SEO
    pub site_title: String,
    pub site_description: String,
    pub site_url: String,
    pub site_keywords: String,

    #[schema(value_type = Vec<Object>)]
    pub social_links: Vec<SocialLink>,

    pub google_analytics_id: String,
    pub google_tag_manager_id: String,

    pub environment: String,
}

impl From<&Settings> for PublicSettings {
    fn from(s: &Settings) -> Self {
        Self {
            portal_title: s.site.portal_title.clone(),
            portal_description: s.site.portal_description.clone(),
            default_name: s.site.default_name.clone(),
            default_email: s.site.default_email.clone(),
            default_phone: s.site.default_phone.clone(),
            default_location: s.site.default_location.clone(),
            default_github: s.site.default_github.clone(),
            default_linkedin: s.site.default_linkedin.clone(),
            avatar_url: s.site.avatar_url.clone(),
            theme: s.theme.theme,
            primary_color: s.theme.primary_color.clone(),
            background_color: s.theme.background_color.clone(),
            text_color: s.theme.text_color.clone(),
            enable_contact_form: s.mail.enable_contact_form,
            contact_email_recipient: s.mail.contact_email_recipient.clone(),
            smtp_configured: s.mail_enabled(),
            site_title: s.seo.site_title.clone(),
            site_description: s.seo.site_description.clone(),
            site_url: s.seo.site_url.clone(),
            site_keywords: s.seo.site_keywords.clone(),
            social_links: s.social_links(),
            google_analytics_id: s.analytics.google_analytics_id.clone(),
            google_tag_manager_id: s.analytics.google_tag_manager_id.clone(),
            environment: s.app_env.clone(),
        }
    }
}
