// Sample input synthesis. Every builder mixes random tokens into its text
// so repeated runs never submit the same payload twice.

use crate::requests::{
    JobDescriptionParameters, LengthQuery, LocationQuery, QuantityQuery, SeoQuery, TextQuery,
    TranslationQuery,
};
use rand::Rng;

/// Characters used for random filler tokens.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const LANGUAGE: &str = "English";
pub const TRANSLATION_TARGET: &str = "Spanish";
const NEUTRAL: &str = "Neutral";

/// A string of `len` characters drawn uniformly from [`ALPHABET`].
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

fn neutral() -> Option<String> {
    Some(NEUTRAL.to_string())
}

fn product_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("Apple Watch v.{}", random_string(rng, 8))
}

pub fn job_description<R: Rng + ?Sized>(rng: &mut R) -> JobDescriptionParameters {
    JobDescriptionParameters {
        name: format!("Software Engineer {}", random_string(rng, 5)),
        company_name: format!("Company {}", random_string(rng, 8)),
        minimum_work_experience: "6 years".to_string(),
        minimum_education: "Bachelor degree".to_string(),
        employment_type: "full time".to_string(),
        required_skills: vec![
            "Develop software applications".to_string(),
            "Collaborate with cross-functional teams".to_string(),
            format!("Participate in {} projects", random_string(rng, 6)),
        ],
        optional_skills: vec![
            "Proficiency in JavaScript".to_string(),
            "Experience with RESTful APIs".to_string(),
            format!("Knowledge of {}", random_string(rng, 7)),
        ],
        country: "USA".to_string(),
        remote: true,
        visa_sponsored: true,
        voice_tone: "enthusiastic".to_string(),
        context: "Category C driving license".to_string(),
        language: LANGUAGE.to_string(),
    }
}

pub fn related_skills() -> QuantityQuery {
    QuantityQuery {
        content: "Programming".to_string(),
        language: LANGUAGE.to_string(),
        max_quantity: 5,
        voice_tone: None,
        context: None,
    }
}

pub fn related_job_positions() -> QuantityQuery {
    QuantityQuery {
        content: "Regional Sales Manager".to_string(),
        ..related_skills()
    }
}

pub fn product_review<R: Rng + ?Sized>(rng: &mut R) -> TextQuery {
    let verdict = if rng.gen_bool(0.5) { "great" } else { "terrible" };
    TextQuery {
        content: format!("This product is {}! {}", verdict, random_string(rng, 10)),
    }
}

pub fn product_categories<R: Rng + ?Sized>(rng: &mut R) -> QuantityQuery {
    QuantityQuery {
        content: product_name(rng),
        language: LANGUAGE.to_string(),
        max_quantity: 5,
        voice_tone: neutral(),
        context: None,
    }
}

pub fn product_intro<R: Rng + ?Sized>(rng: &mut R) -> LengthQuery {
    let name = product_name(rng);
    LengthQuery {
        content: format!("This is a new product called {}. {}", name, random_string(rng, 15)),
        language: LANGUAGE.to_string(),
        max_length: 100,
        voice_tone: Some("Friendly".to_string()),
        context: None,
    }
}

pub fn thank_you_email<R: Rng + ?Sized>(rng: &mut R) -> LengthQuery {
    LengthQuery {
        content: product_name(rng),
        language: LANGUAGE.to_string(),
        max_length: 200,
        voice_tone: Some("Professional".to_string()),
        context: None,
    }
}

pub fn text_with_phone<R: Rng + ?Sized>(rng: &mut R) -> TextQuery {
    let prefix = random_string(rng, 3);
    // zero-padded below, so always four digits
    let line: u32 = rng.gen_range(0..10_000);
    TextQuery {
        content: format!("Contact me at {}-555-{:04} for more information.", prefix, line),
    }
}

pub fn text_with_email<R: Rng + ?Sized>(rng: &mut R) -> TextQuery {
    TextQuery {
        content: format!("Please send an email to test_{}@example.com.", random_string(rng, 5)),
    }
}

pub fn spam_text<R: Rng + ?Sized>(rng: &mut R) -> TextQuery {
    let amount: u32 = rng.gen_range(1000..6000);
    TextQuery {
        content: format!(
            "Congratulations! You have won {} dollars! Click here to claim your prize.",
            amount
        ),
    }
}

pub fn long_text<R: Rng + ?Sized>(rng: &mut R) -> LengthQuery {
    LengthQuery {
        content: format!(
            "This is a long text that needs to be summarized. {} It contains multiple sentences and information.",
            random_string(rng, 50)
        ),
        language: LANGUAGE.to_string(),
        max_length: 50,
        voice_tone: neutral(),
        context: None,
    }
}

pub fn keyword_content<R: Rng + ?Sized>(rng: &mut R) -> QuantityQuery {
    QuantityQuery {
        content: format!(
            "This is some content about cars, toys, kids and {} that needs keywords.",
            random_string(rng, 10)
        ),
        language: LANGUAGE.to_string(),
        max_quantity: 5,
        voice_tone: neutral(),
        context: None,
    }
}

pub fn translation<R: Rng + ?Sized>(rng: &mut R) -> TranslationQuery {
    TranslationQuery {
        content: format!("This is a text to translate. {}", random_string(rng, 10)),
        language: TRANSLATION_TARGET.to_string(),
        voice_tone: neutral(),
        context: None,
    }
}

pub fn paraphrase<R: Rng + ?Sized>(rng: &mut R) -> LengthQuery {
    LengthQuery {
        content: format!("This is a text that needs to be paraphrased. {}", random_string(rng, 10)),
        language: LANGUAGE.to_string(),
        max_length: 100,
        voice_tone: neutral(),
        context: None,
    }
}

pub fn text_with_typos<R: Rng + ?Sized>(rng: &mut R) -> TextQuery {
    TextQuery {
        content: format!(
            "This is a txt with erors that need to be corected. {}",
            random_string(rng, 10)
        ),
    }
}

pub fn seo_content<R: Rng + ?Sized>(rng: &mut R) -> SeoQuery {
    SeoQuery {
        content: format!(
            "This is content about {} that needs SEO tags. Cars,toys.",
            random_string(rng, 8)
        ),
        language: LANGUAGE.to_string(),
        voice_tone: neutral(),
    }
}

pub fn travel_review<R: Rng + ?Sized>(rng: &mut R) -> TextQuery {
    let verdict = if rng.gen_bool(0.5) { "amazing" } else { "disappointing" };
    TextQuery {
        content: format!("The trip was {}. {}", verdict, random_string(rng, 10)),
    }
}

pub fn tour_product<R: Rng + ?Sized>(rng: &mut R) -> LocationQuery {
    LocationQuery {
        content: format!("Tour, {}", random_string(rng, 8)),
        city: "Paris".to_string(),
        country: "France".to_string(),
        language: LANGUAGE.to_string(),
        max_quantity: 5,
        voice_tone: neutral(),
        context: None,
    }
}

pub fn hospitality_product<R: Rng + ?Sized>(rng: &mut R) -> LocationQuery {
    LocationQuery {
        content: format!("Hotel {}", random_string(rng, 8)),
        city: "New York".to_string(),
        country: "USA".to_string(),
        language: LANGUAGE.to_string(),
        max_quantity: 5,
        voice_tone: neutral(),
        context: None,
    }
}
