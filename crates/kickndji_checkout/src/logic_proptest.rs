#[cfg(test)]
mod tests {
    use crate::logic::{client_reference, parse_client_reference, validate_booking};
    use crate::models::{BookingPayload, Quote, Role};
    use proptest::prelude::*;
    use serde_json::json;

    proptest! {
        // Only "docent" gets the instructor rate
        #[test]
        fn test_unit_price_depends_only_on_role(role in "[a-zA-Z]{0,12}") {
            let expected = if role == "docent" { 1000 } else { 1500 };
            prop_assert_eq!(Role::from_raw(&role).unit_amount(), expected);
        }

        // Padding around "docent" never earns the instructor rate
        #[test]
        fn test_padded_docent_role_pays_student_rate(
            before in "[ \t]{0,3}",
            after in "[ \t]{0,3}",
        ) {
            prop_assume!(!(before.is_empty() && after.is_empty()));
            let role = format!("{}docent{}", before, after);
            let payload: BookingPayload = serde_json::from_value(json!({
                "name": "Jan",
                "email": "jan@x.nl",
                "role": role,
                "date": "2024-06-01",
                "startTime": "10:00",
                "hours": 2
            })).unwrap();

            let booking = validate_booking(payload).unwrap();
            prop_assert_eq!(&booking.role, &role);
            prop_assert_eq!(Quote::new(booking.role_kind(), booking.hours).total, 3000);
        }

        // Total is exact integer cents
        #[test]
        fn test_total_is_unit_times_hours(is_docent in any::<bool>(), hours in 1u32..10_000) {
            let role = if is_docent { Role::Docent } else { Role::Student };
            let quote = Quote::new(role, hours);

            prop_assert_eq!(quote.quantity, hours);
            prop_assert_eq!(quote.total, role.unit_amount() * i64::from(hours));

            let display = quote.total_display();
            let (euros, cents) = display.split_once('.').unwrap();
            prop_assert_eq!(cents.len(), 2);
            prop_assert_eq!(
                euros.parse::<i64>().unwrap() * 100 + cents.parse::<i64>().unwrap(),
                quote.total
            );
        }

        // Any valid hours value survives validation unchanged
        #[test]
        fn test_valid_hours_round_trip(hours in 1u32..100_000, as_string in any::<bool>()) {
            let hours_value = if as_string { json!(hours.to_string()) } else { json!(hours) };
            let payload: BookingPayload = serde_json::from_value(json!({
                "name": "Jan",
                "email": "jan@x.nl",
                "role": "docent",
                "date": "2024-06-01",
                "startTime": "10:00",
                "hours": hours_value
            })).unwrap();

            prop_assert_eq!(validate_booking(payload).unwrap().hours, hours);
        }

        // Pipes and percent signs in free-text fields never shift the reference parts
        #[test]
        fn test_client_reference_keeps_six_parts(
            name in "[a-zA-Z |%]{1,30}",
            phone in "[0-9 |%+]{0,15}",
        ) {
            let payload: BookingPayload = serde_json::from_value(json!({
                "name": name,
                "email": "jan@x.nl",
                "phone": phone,
                "role": "leerling",
                "date": "2024-06-01",
                "startTime": "10:00",
                "hours": 2
            })).unwrap();
            let booking = match validate_booking(payload) {
                Ok(booking) => booking,
                // blank names are rejected before a reference is built
                Err(_) => return Ok(()),
            };

            let parts = parse_client_reference(&client_reference(&booking)).unwrap();
            prop_assert_eq!(&parts[0], &booking.name);
            prop_assert_eq!(&parts[5], booking.phone.as_deref().unwrap_or(""));
        }
    }
}
