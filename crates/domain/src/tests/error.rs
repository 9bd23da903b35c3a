// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidCarparkNumber(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid car park number: test");

    let err: DomainError = DomainError::InvalidAddress(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid address: test");

    let err: DomainError = DomainError::InvalidCoordinate {
        value: String::from("north"),
        reason: "expected '<latitude>, <longitude>'",
    };
    assert_eq!(
        format!("{err}"),
        "Invalid coordinate 'north': expected '<latitude>, <longitude>'"
    );

    let err: DomainError = DomainError::InvalidLotCount {
        field: "total lots",
        value: String::from("-3"),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid total lots: '-3' is not a non-negative whole number"
    );

    let err: DomainError = DomainError::InvalidNightParking(String::from("MAYBE"));
    assert_eq!(
        format!("{err}"),
        "Invalid night parking: 'MAYBE'. Must be YES or NO"
    );

    let err: DomainError = DomainError::InvalidTag(String::from("two words"));
    assert_eq!(
        format!("{err}"),
        "Invalid tag 'two words': tags must be alphanumeric"
    );

    let err: DomainError = DomainError::WrongFieldCount {
        expected: 10,
        actual: 9,
    };
    assert_eq!(
        format!("{err}"),
        "Expected 10 fields in feed record, found 9"
    );
}
