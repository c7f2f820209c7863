use rbook_export::{
    parse_book, render_front_matter, sanitize_title, ExportRecipe, References, RecipeBook,
};

const BOOK: &str = r#"<rbook>
  <categories>
    <category id="1" name="Dessert"/>
    <category id="2" name="Holiday"/>
  </categories>
  <users>
    <user id="7" name="Jane"/>
  </users>
  <recipes>
    <recipe id="1" name="Pie" submittedby="7">
      <ingredientset id="1" name="Crust">
        <ingredient amount="2 cups" description="flour"/>
        <ingredient amount="" description=""/>
        <ingredient amount="1/2 tsp" description="salt"/>
      </ingredientset>
      <ingredientset id="2" name="Filling">
        <ingredient amount="6" description="apples"/>
        <ingredient amount="to taste" description=""/>
      </ingredientset>
      <steps><step>Make crust</step><step>Fill</step><step>Bake</step></steps>
      <rcs><rc id="2"/><rc id="1"/></rcs>
    </recipe>
    <recipe id="2" name="Toast" submittedby="8">
      <steps><step>Toast bread</step></steps>
    </recipe>
    <recipe id="3" name="Lemonade" submittedby="7">
      <ingredientset id="3" name="">
        <ingredient amount="4" description="lemons"/>
        <ingredient amount="" description=""/>
      </ingredientset>
    </recipe>
  </recipes>
</rbook>"#;

fn front_matter(book: &RecipeBook, index: usize) -> serde_yaml::Value {
    let refs = References::from_book(book);
    let rendered = render_front_matter(&ExportRecipe::new(&book.recipes[index], &refs)).unwrap();
    let body = rendered
        .strip_prefix("---\n")
        .and_then(|s| s.strip_suffix("---\n\n"))
        .unwrap();
    serde_yaml::from_str(body).unwrap()
}

#[test]
fn test_grouped_shape_for_multiple_sets() {
    let book = parse_book(BOOK).unwrap();
    let fm = front_matter(&book, 0);

    let groups = fm["ingredients"].as_sequence().unwrap();
    assert_eq!(groups.len(), 2);

    let crust = groups[0]["Crust"].as_sequence().unwrap();
    assert_eq!(crust.len(), 2);
    assert_eq!(crust[0]["flour"], "2 cups");
    assert_eq!(crust[1]["salt"], "1/2 tsp");

    let filling = groups[1]["Filling"].as_sequence().unwrap();
    assert_eq!(filling.len(), 2);
    assert_eq!(filling[0]["apples"], "6");
    // Amount without a description is kept under an empty key
    assert_eq!(filling[1][""], "to taste");
}

#[test]
fn test_no_ingredients_key_without_sets() {
    let book = parse_book(BOOK).unwrap();
    let fm = front_matter(&book, 1);

    assert!(fm.get("ingredients").is_none());
    assert_eq!(fm["author"], "");
    assert_eq!(fm["directions"][0], "Toast bread");
}

#[test]
fn test_simple_shape_ignores_set_name() {
    let book = parse_book(BOOK).unwrap();
    let fm = front_matter(&book, 2);

    let ingredients = fm["ingredients"].as_sequence().unwrap();
    assert_eq!(ingredients.len(), 1);
    assert_eq!(ingredients[0]["lemons"], "4");
}

#[test]
fn test_blank_ingredients_never_exported() {
    let book = parse_book(BOOK).unwrap();
    for index in 0..book.recipes.len() {
        let refs = References::from_book(&book);
        let rendered =
            render_front_matter(&ExportRecipe::new(&book.recipes[index], &refs)).unwrap();
        assert!(!rendered.contains("'': ''"), "recipe {}", index);
    }
}

#[test]
fn test_directions_match_steps() {
    let book = parse_book(BOOK).unwrap();
    for (index, recipe) in book.recipes.iter().enumerate() {
        let fm = front_matter(&book, index);
        let directions: Vec<String> = fm["directions"]
            .as_sequence()
            .unwrap()
            .iter()
            .map(|d| d.as_str().unwrap().to_string())
            .collect();
        assert_eq!(directions, recipe.steps);
    }
}

#[test]
fn test_categories_follow_reference_order() {
    let book = parse_book(BOOK).unwrap();
    let fm = front_matter(&book, 0);

    assert_eq!(fm["categories"][0], "Holiday");
    assert_eq!(fm["categories"][1], "Dessert");
}

#[test]
fn test_sanitize_title_is_idempotent_for_book_titles() {
    let book = parse_book(BOOK).unwrap();
    for recipe in &book.recipes {
        let once = sanitize_title(&recipe.name);
        assert_eq!(sanitize_title(&once), once);
    }
}
