//! # Seed Catalog
//!
//! Nine sauces loaded once at startup, through the same repository the routes use.
//! Only an empty store is seeded so restarting against Redis does not duplicate them.
use tracing::info;

use crate::{
    repository::{HotSauceRepository, RepositoryError},
    sauce::NewHotSauce,
};

fn sauce(brand_name: &str, sauce_name: &str, description: &str, url: &str, heat: i32) -> NewHotSauce {
    NewHotSauce {
        brand_name: brand_name.to_string(),
        sauce_name: sauce_name.to_string(),
        description: description.to_string(),
        url: url.to_string(),
        heat,
    }
}

pub fn seed_sauces() -> Vec<NewHotSauce> {
    vec![
        sauce(
            "Truff",
            "Hot Sauce",
            "Our sauce is a curated blend of ripe chili peppers, organic agave nectar, black truffle, and \
             savory spices. This combination of ingredients delivers a flavor profile unprecedented to hot sauce.",
            "https://truffhotsauce.com/collections/sauce/products/truff",
            2_500,
        ),
        sauce(
            "Truff",
            "Hotter Sauce",
            "TRUFF Hotter Sauce is a jalapeño rich blend of red chili peppers, Black Truffle and Black Truffle \
             Oil, Organic Agave Nectar, Red Habanero Powder, Organic Cumin and Organic Coriander. Perfectly \
             balanced and loaded with our same iconic flavor, TRUFF Hotter Sauce offers a “less sweet, more heat” \
             rendition of the Flagship original.",
            "https://truffhotsauce.com/collections/sauce/products/hotter-truff-hot-sauce",
            4_000,
        ),
        sauce(
            "Cholula",
            "Original",
            "Cholula Original Hot Sauce is created from a generations old recipe that features carefully-selected \
             arbol and piquin peppers and a blend of signature spices. We love it on burgers and chicken but have \
             heard it’s amazing on pizza. Uncap Real Flavor with Cholula Original.",
            "https://www.cholula.com/original.html",
            3_600,
        ),
        sauce(
            "Mad Dog",
            "357",
            "Finally, a super hot sauce that tastes like real chile peppers. This sauce is blended \
             with ingredients that create a sauce fit to take your breath away. About five seconds after you \
             taste the recommended dose of one drop, prepare your mouth and mind for five to 20 minutes of agony \
             that all true chileheads fully understand and appreciate.",
            "https://www.saucemania.com.au/mad-dog-357-hot-sauce-148ml/",
            357_000,
        ),
        sauce(
            "Hot Ones",
            "Fiery Chipotle",
            "This hot sauce was created with one goal in mind: to get celebrity interviewees on Hot Ones to say \
             \"damn that's tasty, and DAMN that's HOT!\" and then spill their deepest secrets to host Sean Evans. \
             The tongue tingling flavors of chipotle, pineapple and lime please the palate while the mix of ghost \
             and habanero peppers make this sauce a scorcher. Hot Ones Fiery Chipotle Hot Sauce is a spicy \
             masterpiece.",
            "https://chillychiles.com/products/hot-ones-fiery-chipotle-hot-sauce",
            15_600,
        ),
        sauce(
            "Hot Ones",
            "The Last Dab",
            "More than simple mouth burn, Pepper X singes your soul. Starting with a pleasant burn in the mouth, \
             the heat passes quickly, lulling you into a false confidence. You take another bite, enjoying the \
             mustard and spice flavours. This would be great on jerk chicken, or Indian food! But then, WHAM! \
             All of a sudden your skin goes cold and your stomach goes hot, and you realize the power of X.",
            "https://www.saucemania.com.au/hot-ones-the-last-dab-hot-sauce-148ml/",
            1_000_000,
        ),
        sauce(
            "Torchbearer",
            "Zombie Apocalypse",
            "The Zombie Apocalypse Hot Sauce lives up to its name, combining Ghost Peppers and Habaneros with a \
             mix of spices, vegetables, and vinegar to create a slow burning blow torch. Some people will feel \
             the heat right away, but others can take a few minutes for the full impact to set in. The heat can \
             last up to 20 minutes, creating a perfect match between very high heat and amazing flavor. Try it \
             on all your favorite foods - wings, chili, soups, steak or even a sandwich in need of a major kick.",
            "https://heatonist.com/products/zombie-apocalypse",
            100_000,
        ),
        sauce(
            "Heartbeat",
            "Pineapple Habanero",
            "Pineapple Habanero is Heartbeat Hot Sauce’s most recent offering and their spiciest to date! They’ve \
             yet again collaborated with an Ontario craft brewery, this time from their home town of Thunder Bay. \
             Made with the help of Sleeping Giant Brewery’s award winning Beaver Duck session IPA, this sauce has \
             a boldly pronounced fruitiness and a bright but savoury vibe from start to finish.",
            "https://www.saucemania.com.au/heartbeat-pineapple-habanero-hot-sauce-177ml/",
            12_200,
        ),
        sauce(
            "Karma Sauce",
            "Burn After Eating",
            "Karma Sauce Burn After Eating Hot Sauce is imbued with a unique flavour thanks to green mango, \
             ajwain and hing powder. Forged with a top-secret blend of super hots that may or may not include \
             Bhut Jolokia (Ghost), Scorpion, Carolina Reaper, 7-Pot Brown and 7-Pot Primo. This isn’t a sauce you \
             eat, it’s one you survive.",
            "https://www.saucemania.com.au/karma-sauce-burn-after-eating-hot-sauce-148ml/",
            669_000,
        ),
    ]
}

/// Returns how many sauces were written, 0 when the store already had data.
pub async fn load_seed(repository: &dyn HotSauceRepository) -> Result<usize, RepositoryError> {
    let existing = repository.count().await?;
    if existing > 0 {
        info!("Store already holds {existing} sauces, skipping seed");
        return Ok(0);
    }

    let sauces = seed_sauces();
    let total = sauces.len();
    for sauce in sauces {
        repository.save(sauce.into()).await?;
    }

    info!("Seeded {total} sauces");

    Ok(total)
}
