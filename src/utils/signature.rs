pub fn get_signature(version: &str) -> String {
    let signature = format!(
        r#"
      /\
     /  \                   ⬆️  addonup (World of Warcraft addon updater)
    / /\ \
   / /  \ \                 Compares the installed addon against its
  /_/ /\ \_\                remote version feed and swaps in the new
     /  \                   build when one is available.
    /____\
                            v{}
"#,
        version
    );

    signature
}
