//! The roster loaded into an empty `teachers` table on first start.

/// Initial staff list. Seeded teachers get the ids `t-0`, `t-1`, ... in this
/// order, see [`seed_id`].
pub const INITIAL_TEACHERS: &[&str] = &[
    "Cg. Azman bin Mohd Nor @ Harun",
    "Cg. Wan Johari bin Wan Gati",
    "Cg. Abdullah bin Ab Rahman",
    "Cg. Shaylatulazwin binti Abdul Wahid",
    "Cg. Anuar Ruddin bin Salleh",
    "Cg. Zalina binti Omar",
    "Cg. Mohd Kamal bin Harun",
    "Cg. Mohd Shamsuddin bin Othman",
    "Cg. Alimien bin Muda",
    "Ust. Ismail bin Salleh",
    "Cg. Mohammad Syafiq bin Abdul Majeed",
    "Cg. Mohd Hamidi bin Mohd Noor",
    "Cg. Dul – Rosidi bin Ahmad",
    "Cg. Mohd Khalis bin Abd. Malik",
    "Cg. Amirul Shahadam bin Suhasmadi",
    "Cg. Mohd Rizuan bin Ibrahim",
    "Cg. Nasharuddin bin Ngah",
    "Cg. Mohd Faizal bin Mohd Noor",
    "Cg. Mohd Shufian bin Abdul Kadir",
    "Cg. Nor Azimah binti Rokman",
    "Cg. Farida Hamimi binti Muhamad Saidi",
    "Ustz. Hasni binti Baba",
    "Cg. Juliani binti Mansor",
    "Cg. Kartini binti Abdul Rahim",
    "Cg. Noordiana binti Abdul Aziz",
    "Cg. Nor Hamiza binti Ramli",
    "Cg. Noorazlina binti Ismail",
    "Cg. Norul Hazlinda bt. Romli",
    "Cg. Hibatul ’ Atikah binti Khairul Anuar",
    "Cg. Nur Faizzatul Ain binti Othman",
    "Cg. Rosharizam binti Abd. Ghani",
    "Ustz. Rosmawati binti Mamat",
    "Cg. Rusmaniza binti Jusoh",
    "Cg. Sazilawati binti Yusof",
    "Cg. Saidatul Asima binti Kamarulzaman Shah",
    "Cg. Siti Halimah binti Ab. Halim",
    "Cg. Siti Saniah binti Idris",
    "Cg. Suriani binti Muda",
    "Ustz Rohana binti Awang",
    "Cg. Wan Nor Azlinda bt. Wan Abd. Aziz",
    "Cg. Amirah Nasuha binti Suhaimi",
    "Cg. Suhaila Afiqah binti Mohd Nasir",
    "Cg. Nurul Najibah binti Musameh",
    "Cg. Iza Amirah binti Muhamad Zawahir",
    "Cg. Nurzahidatullazura binti Amzah",
    "Cg. Azizah binti Ismail",
];

/// Deterministic roster id for the seed entry at `index`.
pub fn seed_id(index: usize) -> String {
    format!("t-{index}")
}
