//! Scenarios shared by every backend

use crate::algebra::FheUintT;
use crate::circuits::{debt_cancel_circuit, dot_product_uint, location_circuit};
use crate::keys::{CollectiveDecryptT, PublicKeyT};

pub fn test_select_min_max<PK, D>(pk: &PK, committee: &D, values: &[u32])
where
    PK: PublicKeyT,
    D: CollectiveDecryptT<Bool = PK::Bool, U8 = PK::U8, U32 = PK::U32>,
{
    let decrypt = |ct: &PK::U32| committee.decrypt_u32(ct).unwrap();

    for &a in values {
        for &b in values {
            let a_fhe = pk.encrypt_u32(a);
            let b_fhe = pk.encrypt_u32(b);

            for cond in [false, true] {
                let cond_fhe = pk.encrypt_bool(cond);
                let selected = <PK::U32 as FheUintT>::select(&cond_fhe, &a_fhe, &b_fhe);
                assert_eq!(decrypt(&selected), if cond { a } else { b });
                assert_eq!(decrypt(&a_fhe.mask(&cond_fhe)), if cond { a } else { 0 });
            }

            assert_eq!(decrypt(&a_fhe.min(&b_fhe)), a.min(b));
            assert_eq!(decrypt(&a_fhe.max(&b_fhe)), a.max(b));
            assert_eq!(decrypt(&b_fhe.min(&a_fhe)), decrypt(&a_fhe.min(&b_fhe)));
            assert_eq!(decrypt(&b_fhe.max(&a_fhe)), decrypt(&a_fhe.max(&b_fhe)));
        }

        let a_fhe = pk.encrypt_u32(a);
        assert_eq!(decrypt(&a_fhe.min(&a_fhe)), a);
        assert_eq!(decrypt(&a_fhe.max(&a_fhe)), a);
    }

    if let [a, b, c, ..] = values {
        let (a, b, c) = (pk.encrypt_u32(*a), pk.encrypt_u32(*b), pk.encrypt_u32(*c));
        assert_eq!(
            decrypt(&a.min(&b).min(&c)),
            decrypt(&a.min(&b.min(&c)))
        );
        assert_eq!(
            decrypt(&a.max(&b).max(&c)),
            decrypt(&a.max(&b.max(&c)))
        );
    }
}

/// A owes B 100. A and B are strangers but both know 5.
pub fn test_debt_common_acquaintance<PK, D>(pk: &PK, committee: &D)
where
    PK: PublicKeyT,
    D: CollectiveDecryptT<Bool = PK::Bool, U8 = PK::U8, U32 = PK::U32>,
{
    let res = debt_cancel_circuit(
        &pk.encrypt_u32_slice(&[5, 11]),
        &pk.encrypt_u32_slice(&[50, 100]),
        &pk.encrypt_u32_slice(&[5, 12]),
        &pk.encrypt_u32_slice(&[40, 1000]),
        100,
    )
    .unwrap();

    assert_eq!(
        committee.decrypt_u32_slice(&res.ids).unwrap(),
        vec![5, 0, 0, 0]
    );
    assert_eq!(
        committee.decrypt_u32_slice(&res.amounts).unwrap(),
        vec![40, 0, 0, 0]
    );
    assert_eq!(committee.decrypt_u32(&res.amount_left).unwrap(), 60);
}

pub fn test_debt_no_common_acquaintance<PK, D>(pk: &PK, committee: &D)
where
    PK: PublicKeyT,
    D: CollectiveDecryptT<Bool = PK::Bool, U8 = PK::U8, U32 = PK::U32>,
{
    let res = debt_cancel_circuit(
        &pk.encrypt_u32_slice(&[1, 2, 3]),
        &pk.encrypt_u32_slice(&[50, 100, 10]),
        &pk.encrypt_u32_slice(&[4, 5]),
        &pk.encrypt_u32_slice(&[40, 1000]),
        100,
    )
    .unwrap();

    assert_eq!(committee.decrypt_u32_slice(&res.ids).unwrap(), vec![0; 6]);
    assert_eq!(
        committee.decrypt_u32_slice(&res.amounts).unwrap(),
        vec![0; 6]
    );
    assert_eq!(committee.decrypt_u32(&res.amount_left).unwrap(), 100);
}

pub fn test_location<PK, D>(pk: &PK, committee: &D)
where
    PK: PublicKeyT,
    D: CollectiveDecryptT<Bool = PK::Bool, U8 = PK::U8, U32 = PK::U32>,
{
    let location = pk.encrypt_u8_slice(&[3, 7, 9]);

    let guesses = vec![pk.encrypt_u8_slice(&[1, 2, 3]), pk.encrypt_u8_slice(&[3, 7, 9])];
    let found = location_circuit(&location, &guesses).unwrap();
    assert!(committee.decrypt_bool(&found).unwrap());

    let guesses = vec![pk.encrypt_u8_slice(&[1, 2, 3]), pk.encrypt_u8_slice(&[4, 5, 6])];
    let found = location_circuit(&location, &guesses).unwrap();
    assert!(!committee.decrypt_bool(&found).unwrap());
}

pub fn test_dot_product_uint<PK, D>(pk: &PK, committee: &D)
where
    PK: PublicKeyT,
    D: CollectiveDecryptT<Bool = PK::Bool, U8 = PK::U8, U32 = PK::U32>,
{
    let a = [3u32, 0, u32::MAX, 7];
    let b = [5u32, 9, 2, 1];
    let expected = a
        .iter()
        .zip(&b)
        .fold(0u32, |sum, (x, y)| sum.wrapping_add(x.wrapping_mul(*y)));

    let res = dot_product_uint(&pk.encrypt_u32_slice(&a), &pk.encrypt_u32_slice(&b)).unwrap();
    assert_eq!(committee.decrypt_u32(&res).unwrap(), expected);
}
