//! Benchmark fixture documents.

/// A mid-sized executable document: nested selections, fragments,
/// variables, and directives.
pub const OPERATIONS: &str = r#"
query HeroComparison($first: Int = 3, $episode: Episode) {
  leftComparison: hero(episode: EMPIRE) {
    ...comparisonFields
    friendsConnection(first: $first) {
      totalCount
      edges {
        node {
          name
        }
      }
    }
  }
  rightComparison: hero(episode: JEDI) @include(if: true) {
    ...comparisonFields
  }
}

mutation CreateReview($episode: Episode, $review: ReviewInput!) {
  createReview(episode: $episode, review: $review) {
    stars
    commentary
  }
}

subscription OnReview($episode: Episode) {
  reviewAdded(episode: $episode) {
    stars
  }
}

fragment comparisonFields on Character {
  name
  appearsIn
  friends {
    name
  }
}
"#;

/// A mid-sized schema document: every type-system definition kind.
pub const SCHEMA: &str = r#"
schema {
  query: Query
  mutation: Mutation
}

"The root query type"
type Query {
  hero(episode: Episode = NEWHOPE): Character
  search(text: String!): [SearchResult!]
}

type Mutation {
  createReview(episode: Episode, review: ReviewInput!): Review
}

interface Character {
  id: ID!
  name: String!
  friends: [Character]
}

type Human implements Character {
  id: ID!
  name: String!
  friends: [Character]
  homePlanet: String
}

union SearchResult = Human | Droid | Starship

enum Episode {
  NEWHOPE
  EMPIRE
  JEDI
}

input ReviewInput {
  stars: Int!
  commentary: String = ""
}

scalar Date

directive @internal(reason: String = "unspecified") on FIELD_DEFINITION | OBJECT
"#;
