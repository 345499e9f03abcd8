//! Entry point bundling every resource accessor.

use std::sync::Arc;

use sms_entity::appeal::Appeal;
use sms_entity::award::Award;
use sms_entity::leave::LeaveSchool;
use sms_entity::log::Log;
use sms_entity::notice::Notice;
use sms_entity::punishment::Punishment;
use sms_entity::status_change::StatusChange;
use sms_entity::student::{StudentBasicInfo, StudentStatusInfo};
use sms_entity::user::{UserAdmin, UserAdvisor, UserStudent};
use sms_http::RequestPipeline;
use sms_session::SessionStore;

use crate::attachment::AttachmentApi;
use crate::auth::SessionManager;
use crate::dashboard::DashboardApi;
use crate::export::ExportApi;
use crate::profile::ProfileApi;
use crate::resource::Resource;

/// The typed client. Cheap to clone; all handles share one pipeline.
#[derive(Debug, Clone)]
pub struct SmsApi {
    pipeline: Arc<RequestPipeline>,
}

impl SmsApi {
    pub fn new(pipeline: Arc<RequestPipeline>) -> Self {
        Self { pipeline }
    }

    /// The underlying pipeline.
    pub fn pipeline(&self) -> &Arc<RequestPipeline> {
        &self.pipeline
    }

    /// The session the client authenticates with.
    pub fn session(&self) -> &Arc<SessionStore> {
        self.pipeline.session()
    }

    /// Login, logout, and own-account updates.
    pub fn auth(&self) -> SessionManager {
        SessionManager::new(Arc::clone(&self.pipeline))
    }

    fn resource<T: crate::record::ApiRecord>(&self) -> Resource<T> {
        Resource::new(Arc::clone(&self.pipeline))
    }

    pub fn user_students(&self) -> Resource<UserStudent> {
        self.resource()
    }

    pub fn user_advisors(&self) -> Resource<UserAdvisor> {
        self.resource()
    }

    pub fn user_admins(&self) -> Resource<UserAdmin> {
        self.resource()
    }

    pub fn basic_info(&self) -> Resource<StudentBasicInfo> {
        self.resource()
    }

    pub fn status_info(&self) -> Resource<StudentStatusInfo> {
        self.resource()
    }

    pub fn awards(&self) -> Resource<Award> {
        self.resource()
    }

    pub fn punishments(&self) -> Resource<Punishment> {
        self.resource()
    }

    pub fn appeals(&self) -> Resource<Appeal> {
        self.resource()
    }

    pub fn status_changes(&self) -> Resource<StatusChange> {
        self.resource()
    }

    pub fn leave_school(&self) -> Resource<LeaveSchool> {
        self.resource()
    }

    pub fn notices(&self) -> Resource<Notice> {
        self.resource()
    }

    pub fn logs(&self) -> Resource<Log> {
        self.resource()
    }

    pub fn attachments(&self) -> AttachmentApi {
        AttachmentApi::new(Arc::clone(&self.pipeline))
    }

    pub fn exports(&self) -> ExportApi {
        ExportApi::new(Arc::clone(&self.pipeline))
    }

    pub fn profile(&self) -> ProfileApi {
        ProfileApi::new(Arc::clone(&self.pipeline))
    }

    pub fn dashboard(&self) -> DashboardApi {
        DashboardApi::new(Arc::clone(&self.pipeline))
    }
}
