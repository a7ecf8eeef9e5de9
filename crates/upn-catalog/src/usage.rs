// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Which phones have used a service, joined from the usage and phone listings.

use std::collections::{HashMap, HashSet};

use upn_core::types::{Phone, ServiceId, UsageRecord};

/// Phones with at least one usage record for `service`, in the order of
/// their first usage record. Records pointing at unknown phones are skipped.
pub fn phones_for_service(service: &ServiceId, usage: &[UsageRecord], phones: &[Phone]) -> Vec<Phone> {
    let by_id: HashMap<&str, &Phone> = phones.iter().map(|p| (p.id.as_str(), p)).collect();
    let mut seen = HashSet::new();

    usage
        .iter()
        .filter(|u| &u.service_id == service)
        .filter(|u| seen.insert(u.phone_id.as_str()))
        .filter_map(|u| by_id.get(u.phone_id.as_str()).map(|p| (*p).clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(id: &str, number: &str) -> Phone {
        Phone {
            id: id.into(),
            number: number.into(),
            operator_id: "o1".into(),
            created_at: String::new(),
        }
    }

    fn used(phone_id: &str, service_id: &str) -> UsageRecord {
        UsageRecord {
            id: format!("{phone_id}-{service_id}"),
            phone_id: phone_id.into(),
            service_id: ServiceId::from(service_id),
            used_at: String::new(),
        }
    }

    fn numbers(phones: &[Phone]) -> Vec<&str> {
        phones.iter().map(|p| p.number.as_str()).collect()
    }

    #[test]
    fn keeps_usage_order_for_the_service_only() {
        let phones = [phone("p1", "+7 900 000 00 01"), phone("p2", "+7 900 000 00 02")];
        let usage = [used("p2", "s1"), used("p1", "s2"), used("p1", "s1")];

        let found = phones_for_service(&ServiceId::from("s1"), &usage, &phones);
        assert_eq!(numbers(&found), ["+7 900 000 00 02", "+7 900 000 00 01"]);
    }

    #[test]
    fn repeated_usage_lists_phone_once() {
        let phones = [phone("p1", "+7 900 000 00 01")];
        let usage = [used("p1", "s1"), used("p1", "s1")];

        assert_eq!(phones_for_service(&ServiceId::from("s1"), &usage, &phones).len(), 1);
    }

    #[test]
    fn usage_of_deleted_phone_is_skipped() {
        let usage = [used("gone", "s1")];
        assert!(phones_for_service(&ServiceId::from("s1"), &usage, &[]).is_empty());
    }
}
