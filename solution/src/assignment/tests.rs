use itertools::assert_equal;

use super::*;
use crate::test_utilities::init_scenario_a;

#[test]
fn empty_assignment_has_all_seats_free() {
    // ARRANGE
    let d = init_scenario_a();

    // ACT
    let assignment = Assignment::empty(d.students.clone(), d.companies.clone());

    // ASSERT
    assert_eq!(assignment.number_of_placed(), 0);
    assert_equal(
        assignment.unplaced_students(),
        vec![d.ogrenci1, d.ogrenci2, d.ogrenci3],
    );
    assert_eq!(assignment.total_remaining_capacity(), 32);
    assert_eq!(assignment.remaining_capacity(d.firma1), 1);
    assert!(assignment.verify_consistency().is_ok());
}

#[test]
fn place_takes_a_seat_and_records_rank() {
    // ARRANGE
    let d = init_scenario_a();
    let mut assignment = Assignment::empty(d.students.clone(), d.companies.clone());

    // ACT
    let rank_first = assignment.place(d.ogrenci1, d.firma1).unwrap();
    let rank_second = assignment.place(d.ogrenci3, d.firma1);

    // ASSERT
    assert_eq!(rank_first, 1);
    assert_eq!(
        rank_second,
        Err(InvariantViolation::CapacityExhausted {
            company: CompanyId::from("Firma_1"),
            student: StudentId::from("Ogrenci_3"),
        })
    );
    assert_eq!(assignment.company_of(d.ogrenci1), Some(d.firma1));
    assert_eq!(assignment.rank_of(d.ogrenci1), Some(1));
    assert!(!assignment.is_placed(d.ogrenci3));
    assert!(!assignment.has_spare_capacity(d.firma1));
    assert_equal(assignment.roster_of(d.firma1), vec![d.ogrenci1]);
    assert!(assignment.verify_consistency().is_ok());
}

#[test]
fn place_rejects_placed_students() {
    // ARRANGE
    let d = init_scenario_a();
    let mut assignment = Assignment::empty(d.students.clone(), d.companies.clone());
    assignment.place(d.ogrenci2, d.firma3).unwrap();

    // ACT
    let result = assignment.place(d.ogrenci2, d.firma4);

    // ASSERT
    assert_eq!(
        result,
        Err(InvariantViolation::AlreadyPlaced {
            student: StudentId::from("Ogrenci_2"),
            company: CompanyId::from("Firma_3"),
        })
    );
    assert_eq!(assignment.remaining_capacity(d.firma4), 10);
}

#[test]
fn place_rejects_companies_outside_the_list() {
    // ARRANGE
    let (students, companies) = crate::test_utilities::build_instance(
        &[("picky", 3.0, &["A"])],
        &[("A", 1), ("B", 1)],
    );
    let mut assignment = Assignment::empty(students, companies);

    // ACT
    let result = assignment.place(StudentIdx::new(0), CompanyIdx::new(1));

    // ASSERT
    assert_eq!(
        result,
        Err(InvariantViolation::NotPreferred {
            student: StudentId::from("picky"),
            company: CompanyId::from("B"),
        })
    );
    assert_eq!(assignment.number_of_placed(), 0);
}

#[test]
fn evict_restores_the_seat() {
    // ARRANGE
    let d = init_scenario_a();
    let mut assignment = Assignment::empty(d.students.clone(), d.companies.clone());
    assignment.place(d.ogrenci1, d.firma1).unwrap();

    // ACT
    let vacated = assignment.evict(d.ogrenci1).unwrap();
    let again = assignment.evict(d.ogrenci1);

    // ASSERT
    assert_eq!(vacated, d.firma1);
    assert_eq!(
        again,
        Err(InvariantViolation::NotPlaced {
            student: StudentId::from("Ogrenci_1"),
        })
    );
    assert_eq!(assignment.remaining_capacity(d.firma1), 1);
    assert_eq!(assignment.roster_size(d.firma1), 0);
    assert_eq!(assignment, Assignment::empty(d.students, d.companies));
}

#[test]
fn swap_exchanges_companies_and_recomputes_ranks() {
    // ARRANGE
    let d = init_scenario_a();
    let mut assignment = Assignment::empty(d.students.clone(), d.companies.clone());
    assignment.place(d.ogrenci1, d.firma2).unwrap();
    assignment.place(d.ogrenci3, d.firma1).unwrap();

    // ACT
    assignment.swap(d.ogrenci1, d.ogrenci3).unwrap();

    // ASSERT
    assert_eq!(assignment.company_of(d.ogrenci1), Some(d.firma1));
    assert_eq!(assignment.rank_of(d.ogrenci1), Some(1));
    assert_eq!(assignment.company_of(d.ogrenci3), Some(d.firma2));
    assert_eq!(assignment.rank_of(d.ogrenci3), Some(1));
    assert_eq!(assignment.remaining_capacity(d.firma1), 0);
    assert_eq!(assignment.remaining_capacity(d.firma2), 0);
    assert!(assignment.verify_consistency().is_ok());
}

#[test]
fn swap_to_unlisted_company_leaves_rank_empty() {
    // ARRANGE
    let (students, companies) = crate::test_utilities::build_instance(
        &[("a", 3.0, &["A"]), ("b", 2.0, &["B"])],
        &[("A", 1), ("B", 1)],
    );
    let a = StudentIdx::new(0);
    let b = StudentIdx::new(1);
    let mut assignment = Assignment::empty(students, companies);
    assignment.place(a, CompanyIdx::new(0)).unwrap();
    assignment.place(b, CompanyIdx::new(1)).unwrap();

    // ACT
    assignment.swap(a, b).unwrap();

    // ASSERT
    assert_eq!(assignment.company_of(a), Some(CompanyIdx::new(1)));
    assert_eq!(assignment.rank_of(a), None);
    assert!(assignment.is_placed(a));
    assert_eq!(assignment.rank_of(b), None);
    assert!(assignment.verify_consistency().is_ok());
}

#[test]
fn swap_requires_two_different_companies() {
    // ARRANGE
    let d = init_scenario_a();
    let mut assignment = Assignment::empty(d.students.clone(), d.companies.clone());
    assignment.place(d.ogrenci1, d.firma3).unwrap();
    assignment.place(d.ogrenci2, d.firma3).unwrap();

    // ACT
    let same_company = assignment.swap(d.ogrenci1, d.ogrenci2);
    let unplaced = assignment.swap(d.ogrenci1, d.ogrenci3);

    // ASSERT
    assert_eq!(
        same_company,
        Err(InvariantViolation::SameCompany {
            first: StudentId::from("Ogrenci_1"),
            second: StudentId::from("Ogrenci_2"),
            company: CompanyId::from("Firma_3"),
        })
    );
    assert_eq!(
        unplaced,
        Err(InvariantViolation::NotPlaced {
            student: StudentId::from("Ogrenci_3"),
        })
    );
    assert_equal(assignment.roster_of(d.firma3), vec![d.ogrenci1, d.ogrenci2]);
}

#[test]
fn clones_evolve_independently() {
    // ARRANGE
    let d = init_scenario_a();
    let mut assignment = Assignment::empty(d.students.clone(), d.companies.clone());
    assignment.place(d.ogrenci1, d.firma1).unwrap();
    let snapshot = assignment.clone();

    // ACT
    assignment.evict(d.ogrenci1).unwrap();
    assignment.place(d.ogrenci2, d.firma1).unwrap();

    // ASSERT
    assert_eq!(snapshot.company_of(d.ogrenci1), Some(d.firma1));
    assert!(!snapshot.is_placed(d.ogrenci2));
    assert_equal(snapshot.roster_of(d.firma1), vec![d.ogrenci1]);
    assert_equal(assignment.roster_of(d.firma1), vec![d.ogrenci2]);
    assert_ne!(snapshot, assignment);
}
