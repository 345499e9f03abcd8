//! Binds entity types to their backend endpoints.

use serde::Serialize;
use serde::de::DeserializeOwned;

use sms_entity::appeal::{Appeal, AppealQuery};
use sms_entity::award::{Award, AwardQuery};
use sms_entity::leave::{LeaveSchool, LeaveSchoolQuery};
use sms_entity::log::{Log, LogQuery};
use sms_entity::notice::{Notice, NoticeQuery};
use sms_entity::punishment::{Punishment, PunishmentQuery};
use sms_entity::status_change::{StatusChange, StatusChangeQuery};
use sms_entity::student::{
    StudentBasicInfo, StudentBasicInfoQuery, StudentStatusInfo, StudentStatusInfoQuery,
};
use sms_entity::user::{UserAdmin, UserAdvisor, UserStudent};

/// A record served under a REST collection.
///
/// `GET {PATH}` lists, `GET {PATH}/{id}` fetches, `DELETE {PATH}/{id}` removes.
pub trait ApiRecord: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection path relative to the base URL.
    const PATH: &'static str;
}

/// Records the client may create (`POST {PATH}`) and update (`PUT {PATH}`).
pub trait WritableRecord: ApiRecord {}

/// Records with a `GET {PATH}/page` endpoint.
pub trait PagedRecord: ApiRecord {
    /// Page selection plus filters.
    type Query: Serialize + DeserializeOwned + Default + Send + Sync;
}

/// Records owned by a student, listable via `GET {PATH}/student/{stuId}`.
pub trait StudentRecord: ApiRecord {}

macro_rules! api_record {
    ($ty:ty, $path:literal) => {
        impl ApiRecord for $ty {
            const PATH: &'static str = $path;
        }
    };
}

api_record!(UserStudent, "/userStudent");
api_record!(UserAdvisor, "/userAdvisor");
api_record!(UserAdmin, "/userAdmin");
api_record!(StudentBasicInfo, "/studentBasicInfo");
api_record!(StudentStatusInfo, "/studentStatusInfo");
api_record!(Award, "/award");
api_record!(Punishment, "/punishment");
api_record!(Appeal, "/appeal");
api_record!(StatusChange, "/statusChange");
api_record!(LeaveSchool, "/leaveSchool");
api_record!(Notice, "/notice");
api_record!(Log, "/log");

impl WritableRecord for UserStudent {}
impl WritableRecord for UserAdvisor {}
impl WritableRecord for UserAdmin {}
impl WritableRecord for StudentBasicInfo {}
impl WritableRecord for StudentStatusInfo {}
impl WritableRecord for Award {}
impl WritableRecord for Punishment {}
impl WritableRecord for Appeal {}
impl WritableRecord for StatusChange {}
impl WritableRecord for LeaveSchool {}
impl WritableRecord for Notice {}

impl PagedRecord for StudentBasicInfo {
    type Query = StudentBasicInfoQuery;
}
impl PagedRecord for StudentStatusInfo {
    type Query = StudentStatusInfoQuery;
}
impl PagedRecord for Award {
    type Query = AwardQuery;
}
impl PagedRecord for Punishment {
    type Query = PunishmentQuery;
}
impl PagedRecord for Appeal {
    type Query = AppealQuery;
}
impl PagedRecord for StatusChange {
    type Query = StatusChangeQuery;
}
impl PagedRecord for LeaveSchool {
    type Query = LeaveSchoolQuery;
}
impl PagedRecord for Notice {
    type Query = NoticeQuery;
}
impl PagedRecord for Log {
    type Query = LogQuery;
}

impl StudentRecord for Award {}
impl StudentRecord for Punishment {}
impl StudentRecord for Appeal {}
impl StudentRecord for StatusChange {}
impl StudentRecord for LeaveSchool {}
