use ezform_config::Config;
use ezform_core_contact_impl::ContactFormServiceImpl;
use ezform_extern_impl::{
    contact::{ContactApiServiceConfig, ContactApiServiceImpl},
    http::HttpClient,
};
use ezform_shared_impl::notification::{ChannelNotificationService, NotificationReceiver};
use tracing::debug;

pub type ContactForm = ContactFormServiceImpl<ContactApiServiceImpl, ChannelNotificationService>;

/// A contact form instance wired to the configured endpoint, together with
/// the receiving end of its notifications.
pub struct Environment {
    pub contact_form: ContactForm,
    pub notifications: NotificationReceiver,
}

impl Environment {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = HttpClient::new(config.http.timeout())?;

        let contact_api_config = ContactApiServiceConfig::new(config.contact_api.endpoint.clone());
        debug!(endpoint = %contact_api_config.endpoint(), "Using contact endpoint");
        let contact_api = ContactApiServiceImpl::new(contact_api_config, http);

        let (notification, notifications) = ChannelNotificationService::new();

        Ok(Self {
            contact_form: ContactFormServiceImpl::new(contact_api, notification),
            notifications,
        })
    }
}
