use serde::{Deserialize, Serialize};

use crate::models::student::Student;

#[derive(Serialize, Deserialize)]
pub struct EnrollRequest{
    pub email: String,
    pub course_id: i64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EnrollResponse{
    pub message: String,
    pub enrolled: bool,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct StudentResponse{
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
            email: student.email,
        }
    }
}
