//! Literal records rendered by the dashboard, appointments and settings pages.

use super::types::{Doctor, UserProfile};

pub const PROFILE: UserProfile = UserProfile {
    name: "CodeOctane",
    age: 20,
    email: "CodeOctane@example.com",
    phone: "+1234567890",
};

pub const DOCTORS: [Doctor; 3] = [
    Doctor {
        name: "Dr. Smith - Cardiologist",
        phone: "+1234567891",
    },
    Doctor {
        name: "Dr. Johnson - Neurologist",
        phone: "+1234567892",
    },
    Doctor {
        name: "Dr. Brown - Dermatologist",
        phone: "+1234567893",
    },
];

pub const SETTINGS_TEXT: &str = "Modify your app settings here.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doctor_order() {
        let lines: Vec<String> = DOCTORS.iter().map(|d| d.display_line()).collect();
        assert_eq!(
            lines,
            vec![
                "Dr. Smith - Cardiologist - +1234567891",
                "Dr. Johnson - Neurologist - +1234567892",
                "Dr. Brown - Dermatologist - +1234567893",
            ]
        );
    }

    #[test]
    fn test_profile_lines() {
        assert_eq!(
            PROFILE.display_lines(),
            [
                "Name: CodeOctane".to_string(),
                "Age: 20".to_string(),
                "Email: CodeOctane@example.com".to_string(),
                "Phone: +1234567890".to_string(),
            ]
        );
    }
}
