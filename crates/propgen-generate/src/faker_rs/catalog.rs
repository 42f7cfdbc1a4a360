use fake::Fake;
use fake::faker::address::en::{
    BuildingNumber, CityName, CountryName, StateAbbr, StateName, StreetName, ZipCode,
};
use fake::faker::company::en::{Bs, Buzzword, CatchPhrase, CompanyName, Industry};
use fake::faker::internet::en::{
    DomainSuffix, FreeEmail, IPv4, IPv6, Password, SafeEmail, UserAgent, Username,
};
use fake::faker::lorem::en::{Paragraph, Sentence, Word, Words};
use fake::faker::name::en::{FirstName, LastName, Name, Suffix, Title};
use fake::faker::phone_number::en::{CellNumber, PhoneNumber};
use rand::Rng;

/// Placeholder ids understood by [`super::FakeText`], as `category.item`.
pub const ALL_IDS: &[&str] = &[
    "name.firstName",
    "name.lastName",
    "name.findName",
    "name.prefix",
    "name.suffix",
    "internet.email",
    "internet.freeEmail",
    "internet.userName",
    "internet.password",
    "internet.ip",
    "internet.ipv6",
    "internet.userAgent",
    "internet.domainSuffix",
    "address.city",
    "address.country",
    "address.state",
    "address.stateAbbr",
    "address.streetName",
    "address.streetAddress",
    "address.zipCode",
    "company.companyName",
    "company.catchPhrase",
    "company.bs",
    "company.buzzword",
    "company.industry",
    "lorem.word",
    "lorem.words",
    "lorem.sentence",
    "lorem.paragraph",
    "phone.phoneNumber",
    "phone.cellNumber",
    "random.number",
    "random.boolean",
];

/// Produce text for one placeholder, or `None` for an unknown id.
pub(crate) fn fake_text<R: Rng + ?Sized>(category: &str, item: &str, rng: &mut R) -> Option<String> {
    let text: String = match (category, item) {
        ("name", "firstName") => FirstName().fake_with_rng(rng),
        ("name", "lastName") => LastName().fake_with_rng(rng),
        ("name", "findName") => Name().fake_with_rng(rng),
        ("name", "prefix") => Title().fake_with_rng(rng),
        ("name", "suffix") => Suffix().fake_with_rng(rng),
        ("internet", "email") => SafeEmail().fake_with_rng(rng),
        ("internet", "freeEmail") => FreeEmail().fake_with_rng(rng),
        ("internet", "userName") => Username().fake_with_rng(rng),
        ("internet", "password") => Password(8..16).fake_with_rng(rng),
        ("internet", "ip") => IPv4().fake_with_rng(rng),
        ("internet", "ipv6") => IPv6().fake_with_rng(rng),
        ("internet", "userAgent") => UserAgent().fake_with_rng(rng),
        ("internet", "domainSuffix") => DomainSuffix().fake_with_rng(rng),
        ("address", "city") => CityName().fake_with_rng(rng),
        ("address", "country") => CountryName().fake_with_rng(rng),
        ("address", "state") => StateName().fake_with_rng(rng),
        ("address", "stateAbbr") => StateAbbr().fake_with_rng(rng),
        ("address", "streetName") => StreetName().fake_with_rng(rng),
        ("address", "streetAddress") => {
            let number: String = BuildingNumber().fake_with_rng(rng);
            let street: String = StreetName().fake_with_rng(rng);
            format!("{number} {street}")
        }
        ("address", "zipCode") => ZipCode().fake_with_rng(rng),
        ("company", "companyName") => CompanyName().fake_with_rng(rng),
        ("company", "catchPhrase") => CatchPhrase().fake_with_rng(rng),
        ("company", "bs") => Bs().fake_with_rng(rng),
        ("company", "buzzword") => Buzzword().fake_with_rng(rng),
        ("company", "industry") => Industry().fake_with_rng(rng),
        ("lorem", "word") => Word().fake_with_rng(rng),
        ("lorem", "words") => {
            let words: Vec<String> = Words(3..4).fake_with_rng(rng);
            words.join(" ")
        }
        ("lorem", "sentence") => Sentence(4..10).fake_with_rng(rng),
        ("lorem", "paragraph") => Paragraph(3..6).fake_with_rng(rng),
        ("phone", "phoneNumber") => PhoneNumber().fake_with_rng(rng),
        ("phone", "cellNumber") => CellNumber().fake_with_rng(rng),
        ("random", "number") => rng.random_range(0..=99_999_i64).to_string(),
        ("random", "boolean") => rng.random_bool(0.5).to_string(),
        _ => return None,
    };
    Some(text)
}
