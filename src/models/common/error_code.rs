/// 业务错误码
///
/// 与 HTTP 状态码配合使用：前两位对应 HTTP 状态，后三位区分具体场景。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 400xx
    BadRequest = 40000,
    FieldNotUpdatable = 40001,

    // 401xx
    Unauthorized = 40100,
    AuthFailed = 40101,
    AccountNotActive = 40102,
    AccountNotApproved = 40103,

    // 403xx
    Forbidden = 40300,
    AdminBootstrapClosed = 40301,

    // 404xx
    NotFound = 40400,
    AdminNotFound = 40401,
    SubAdminNotFound = 40402,
    TeacherNotFound = 40403,
    StudentNotFound = 40404,
    McqNotFound = 40405,
    QuestionNotFound = 40406,

    // 409xx
    EmailAlreadyExists = 40900,

    // 422xx
    UserNameInvalid = 42201,
    EmailInvalid = 42202,
    PasswordInvalid = 42203,
    PhoneInvalid = 42204,
    FullNameInvalid = 42205,
    McqInvalid = 42206,
    OtpInvalid = 42210,
    FileTypeNotAllowed = 42220,
    FileSizeExceeded = 42221,
    MultifileUploadNotAllowed = 42222,
    FileMissing = 42223,

    // 429xx
    RateLimitExceeded = 42900,

    // 500xx
    InternalServerError = 50000,
    RegisterFailed = 50001,
    MailDeliveryFailed = 50002,
    CreateFailed = 50003,
    UpdateFailed = 50004,
    DeleteFailed = 50005,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 40100);
        assert_eq!(ErrorCode::EmailAlreadyExists as i32, 40900);
        assert_eq!(ErrorCode::RateLimitExceeded as i32, 42900);
        assert_eq!(ErrorCode::InternalServerError as i32, 50000);
    }
}
