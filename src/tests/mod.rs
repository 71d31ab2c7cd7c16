mod matching_properties;
