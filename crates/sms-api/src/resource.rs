//! Generic CRUD access to a REST collection.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;

use sms_core::result::AppResult;
use sms_core::types::PageResult;
use sms_entity::log::Log;
use sms_entity::notice::Notice;
use sms_entity::student::StudentStatusInfo;
use sms_http::RequestPipeline;

use crate::record::{ApiRecord, PagedRecord, StudentRecord, WritableRecord};

/// Typed handle to the collection of `T`.
///
/// Which operations exist depends on the traits `T` implements; an
/// operation the backend does not offer for `T` does not compile.
#[derive(Debug)]
pub struct Resource<T> {
    pipeline: Arc<RequestPipeline>,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Resource<T> {
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
            _record: PhantomData,
        }
    }
}

impl<T: ApiRecord> Resource<T> {
    /// Creates a handle on the given pipeline.
    pub fn new(pipeline: Arc<RequestPipeline>) -> Self {
        Self {
            pipeline,
            _record: PhantomData,
        }
    }

    /// Lists every record.
    pub async fn list(&self) -> AppResult<Vec<T>> {
        self.pipeline.get(T::PATH).await
    }

    /// Fetches one record by ID.
    pub async fn get(&self, id: &str) -> AppResult<T> {
        self.pipeline.get(&item_path::<T>(id)).await
    }

    /// Deletes one record by ID.
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        self.pipeline.delete(&item_path::<T>(id)).await
    }
}

impl<T: WritableRecord> Resource<T> {
    /// Creates a record.
    pub async fn create(&self, record: &T) -> AppResult<bool> {
        self.pipeline.post(T::PATH, record).await
    }

    /// Updates a record; the ID is taken from the body.
    pub async fn update(&self, record: &T) -> AppResult<bool> {
        self.pipeline.put(T::PATH, record).await
    }
}

impl<T: PagedRecord> Resource<T> {
    /// Fetches one filtered page.
    pub async fn page(&self, query: &T::Query) -> AppResult<PageResult<T>> {
        self.pipeline
            .get_query(&format!("{}/page", T::PATH), query)
            .await
    }
}

impl<T: StudentRecord> Resource<T> {
    /// Lists the records owned by one student.
    pub async fn by_student(&self, stu_id: &str) -> AppResult<Vec<T>> {
        self.pipeline
            .get(&format!("{}/student/{}", T::PATH, stu_id))
            .await
    }
}

impl Resource<StudentStatusInfo> {
    /// Lists the status records of an advisor's students.
    pub async fn by_advisor(&self, advisor_id: &str) -> AppResult<Vec<StudentStatusInfo>> {
        self.pipeline
            .get(&format!("{}/advisor/{}", StudentStatusInfo::PATH, advisor_id))
            .await
    }
}

const NO_QUERY: [(&str, &str); 0] = [];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UserIdParam<'a> {
    user_id: &'a str,
}

impl Resource<Notice> {
    /// Lists the notices addressed to a user.
    pub async fn by_user(&self, user_id: &str) -> AppResult<Vec<Notice>> {
        self.pipeline
            .get(&format!("{}/user/{}", Notice::PATH, user_id))
            .await
    }

    /// Marks one notice as read.
    pub async fn mark_read(&self, id: &str) -> AppResult<bool> {
        self.pipeline
            .put_query(&format!("{}/read", item_path::<Notice>(id)), &NO_QUERY)
            .await
    }

    /// Marks every notice of a user as read.
    pub async fn mark_all_read(&self, user_id: &str) -> AppResult<bool> {
        self.pipeline
            .put_query(
                &format!("{}/read-all", Notice::PATH),
                &UserIdParam { user_id },
            )
            .await
    }

    /// Number of unread notices of a user.
    pub async fn unread_count(&self, user_id: &str) -> AppResult<u64> {
        self.pipeline
            .get(&format!("{}/unread-count/{}", Notice::PATH, user_id))
            .await
    }
}

impl Resource<Log> {
    /// Lists the operation log of one user.
    pub async fn by_user(&self, user_id: &str) -> AppResult<Vec<Log>> {
        self.pipeline
            .get(&format!("{}/user/{}", Log::PATH, user_id))
            .await
    }
}

pub(crate) fn item_path<T: ApiRecord>(id: &str) -> String {
    format!("{}/{}", T::PATH, id)
}
