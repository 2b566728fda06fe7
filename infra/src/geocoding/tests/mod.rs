mod google_places_tests;
