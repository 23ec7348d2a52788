use criterion::{black_box, criterion_group, criterion_main, Criterion};

use university_core::{CourseId, University};

fn make_university(students: u32, courses: u32, exams_per_student: u32) -> University {
    let mut uni = University::new("Bench University");
    let course_ids: Vec<CourseId> = (0..courses)
        .map(|i| uni.activate_course(format!("Course {i}"), "Bench Teacher"))
        .collect();

    for s in 0..students {
        let id = uni.enroll_student(format!("Student{s}"), "Bench");
        for (k, &course) in course_ids.iter().enumerate() {
            if (s as usize + k) % 2 == 0 {
                uni.register_student_in_course(id, course).unwrap();
            }
        }
        for e in 0..exams_per_student {
            let course = course_ids[((s + e) % courses) as usize];
            let grade = ((s * 7 + e * 13) % 31) as i32;
            uni.record_exam(id, course, grade).unwrap();
        }
    }
    uni
}

fn bench_top_n(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_n");

    let small = make_university(100, 10, 5);
    group.bench_function("students=100,courses=10", |b| {
        b.iter(|| small.top_n(black_box(3)))
    });

    let large = make_university(2000, 40, 10);
    group.bench_function("students=2000,courses=40", |b| {
        b.iter(|| large.top_n(black_box(3)))
    });

    group.finish();
}

fn bench_averages(c: &mut Criterion) {
    let mut group = c.benchmark_group("averages");
    let uni = make_university(1000, 20, 8);

    group.bench_function("course_average", |b| {
        b.iter(|| uni.course_average(black_box(CourseId(15))))
    });

    group.bench_function("student_average", |b| {
        let id = uni.students().nth(500).map(|s| s.id()).unwrap();
        b.iter(|| uni.student_average(black_box(id)))
    });

    group.finish();
}

criterion_group!(benches, bench_top_n, bench_averages);
criterion_main!(benches);
