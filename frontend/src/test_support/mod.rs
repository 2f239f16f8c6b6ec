#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AttendanceRecord, AttendanceStatus, Employee};
    use serde_json::{json, Value};

    pub fn employee(id: &str, code: &str, name: &str) -> Employee {
        Employee {
            id: id.into(),
            employee_id: code.into(),
            full_name: name.into(),
            email: format!("{}@x.com", code.to_lowercase()),
            department: "Engineering".into(),
        }
    }

    pub fn employee_json(id: &str, code: &str, name: &str) -> Value {
        serde_json::to_value(employee(id, code, name)).expect("employee json")
    }

    pub fn attendance(id: &str, employee_id: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: id.into(),
            employee_id: Some(employee_id.into()),
            date: "2025-01-02T00:00:00.000Z".into(),
            status,
            employee: None,
        }
    }

    pub fn attendance_json(id: &str, employee_id: &str, status: &str) -> Value {
        json!({
            "id": id,
            "employeeId": employee_id,
            "date": "2025-01-02T00:00:00.000Z",
            "status": status,
            "employee": {
                "employeeId": "EMP001",
                "fullName": "Jane Doe",
                "department": "Engineering"
            }
        })
    }

    pub fn summary_json(total: u32, present: u32, absent: u32) -> Value {
        json!({ "totalRecords": total, "totalPresent": present, "totalAbsent": absent })
    }
}
