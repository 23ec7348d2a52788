//! Plain-text reports.
//!
//! Row formats:
//! - student: `10000 Mario Rossi`
//! - course: `10,Object Oriented Programming,James Gosling`
//! - ranking: `Mario Rossi : 35.0`
//!
//! Lists put one row per line with no trailing newline.

use university_core::{Course, RankedStudent, Result, Student, StudentId, University};

/// Format a grade or score with at least one decimal digit.
pub fn format_number(value: f64) -> String {
    format!("{value:?}")
}

pub fn student_info(student: &Student) -> String {
    format!(
        "{} {} {}",
        student.id(),
        student.first_name(),
        student.last_name()
    )
}

pub fn course_info(course: &Course) -> String {
    format!(
        "{},{},{}",
        course.id(),
        course.title(),
        course.teacher_name()
    )
}

pub fn attendee_list(students: &[&Student]) -> String {
    students
        .iter()
        .map(|s| student_info(s))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn study_plan(courses: &[&Course]) -> String {
    courses
        .iter()
        .map(|c| course_info(c))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn student_average(student_id: StudentId, average: Option<f64>) -> String {
    match average {
        Some(avg) => format!("Student {student_id} : {}", format_number(avg)),
        None => format!("Student {student_id} hasn't taken any exams"),
    }
}

pub fn course_average(course: &Course, average: Option<f64>) -> String {
    match average {
        Some(avg) => format!(
            "The average for the course {} is: {}",
            course.title(),
            format_number(avg)
        ),
        None => format!("No student has taken the exam in {}", course.title()),
    }
}

pub fn ranking(ranked: &[RankedStudent]) -> String {
    ranked
        .iter()
        .map(|r| {
            format!(
                "{} {} : {}",
                r.student.first_name(),
                r.student.last_name(),
                format_number(r.score)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full multi-section report of a university.
pub fn full_report(university: &University) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("University: {}\n", university.name()));
    if let Some(rector) = university.rector() {
        out.push_str(&format!("Rector: {rector}\n"));
    }

    out.push_str("\n## Students\n");
    for student in university.students() {
        out.push_str(&student_info(student));
        out.push('\n');
    }

    out.push_str("\n## Courses\n");
    for course in university.courses() {
        out.push_str(&course_info(course));
        out.push('\n');
        let attendees = university.attendees(course.id())?;
        if !attendees.is_empty() {
            for line in attendee_list(&attendees).lines() {
                out.push_str(&format!("  {line}\n"));
            }
        }
    }

    out.push_str("\n## Averages\n");
    for student in university.students() {
        let avg = university.student_average(student.id())?;
        out.push_str(&student_average(student.id(), avg));
        out.push('\n');
    }
    for course in university.courses() {
        let avg = university.course_average(course.id())?;
        out.push_str(&course_average(course, avg));
        out.push('\n');
    }

    let best = university.best_students();
    out.push_str("\n## Best students\n");
    if best.is_empty() {
        out.push_str("No exams recorded\n");
    } else {
        out.push_str(&ranking(&best));
        out.push('\n');
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> University {
        let mut uni = University::new("Politecnico di Torino");
        uni.set_rector("Guido", "Saracco");
        let mario = uni.enroll_student("Mario", "Rossi");
        let anna = uni.enroll_student("Anna", "Bianchi");
        let oop = uni.activate_course("Object Oriented Programming", "James Gosling");
        let db = uni.activate_course("Databases", "Edgar Codd");
        uni.register_student_in_course(mario, oop).unwrap();
        uni.register_student_in_course(anna, oop).unwrap();
        uni.register_student_in_course(anna, db).unwrap();
        uni.record_exam(mario, oop, 30).unwrap();
        uni.record_exam(anna, db, 25).unwrap();
        uni
    }

    #[test]
    fn number_format_keeps_decimal() {
        assert_eq!(format_number(20.0), "20.0");
        assert_eq!(format_number(33.5), "33.5");
    }

    #[test]
    fn entity_rows() {
        let uni = sample();
        let mario = uni.student(StudentId(10000)).unwrap();
        assert_eq!(student_info(mario), "10000 Mario Rossi");
        let oop = uni.courses().next().unwrap();
        assert_eq!(
            course_info(oop),
            "10,Object Oriented Programming,James Gosling"
        );
    }

    #[test]
    fn attendees_and_plan() {
        let uni = sample();
        let attendees = uni.attendees(university_core::CourseId(10)).unwrap();
        assert_eq!(
            attendee_list(&attendees),
            "10000 Mario Rossi\n10001 Anna Bianchi"
        );

        let plan = uni.study_plan(StudentId(10001)).unwrap();
        assert_eq!(
            study_plan(&plan),
            "10,Object Oriented Programming,James Gosling\n11,Databases,Edgar Codd"
        );
        assert_eq!(attendee_list(&[]), "");
    }

    #[test]
    fn average_lines() {
        assert_eq!(
            student_average(StudentId(10000), Some(20.0)),
            "Student 10000 : 20.0"
        );
        assert_eq!(
            student_average(StudentId(10000), None),
            "Student 10000 hasn't taken any exams"
        );

        let uni = sample();
        let db = uni.course(university_core::CourseId(11)).unwrap();
        assert_eq!(
            course_average(db, Some(25.0)),
            "The average for the course Databases is: 25.0"
        );
        assert_eq!(
            course_average(db, None),
            "No student has taken the exam in Databases"
        );
    }

    #[test]
    fn ranking_rows() {
        let uni = sample();
        assert_eq!(
            ranking(&uni.best_students()),
            "Mario Rossi : 40.0\nAnna Bianchi : 30.0"
        );
    }

    #[test]
    fn full_report_sections() {
        let report = full_report(&sample()).unwrap();
        assert!(report.starts_with("University: Politecnico di Torino\nRector: Guido Saracco\n"));
        assert!(report.contains("## Students\n10000 Mario Rossi\n10001 Anna Bianchi\n"));
        assert!(report.contains("  10001 Anna Bianchi\n"));
        assert!(report.contains("Student 10001 : 25.0"));
        assert!(report.contains("## Best students\nMario Rossi : 40.0\n"));
    }

    #[test]
    fn full_report_without_exams() {
        let mut uni = University::new("Empty");
        uni.enroll_student("Mario", "Rossi");
        let report = full_report(&uni).unwrap();
        assert!(report.contains("Student 10000 hasn't taken any exams"));
        assert!(report.contains("No exams recorded"));
        assert!(!report.contains("Rector"));
    }
}
