pub async fn root() -> &'static str {

    "Leave & Attendance System API"

}
