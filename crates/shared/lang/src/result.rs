use satchel_domain::constants::{SUCCESS_CODE, SUCCESS_MESSAGE};
use satchel_domain::result::ResultVo;

/// `{ code: 0, message: "success", data }`.
pub fn success_result<T>(data: T) -> ResultVo<T> {
    ResultVo::new(SUCCESS_CODE, SUCCESS_MESSAGE, Some(data))
}

pub fn error_result<T>(code: i32, message: impl Into<String>, data: Option<T>) -> ResultVo<T> {
    ResultVo::new(code, message, data)
}
